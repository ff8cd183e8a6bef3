use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /flyt/state endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct VehicleStateResponse {
    #[serde(default)]
    connected: bool,
    armed: bool,
    #[serde(default)]
    guided: bool,
    /// Flight mode string as reported by FlytOS, e.g. `"API|WAYPOINT"`.
    mode: String,
}

impl SerdeJSONBodyHTTPResponseType for VehicleStateResponse {}

impl VehicleStateResponse {
    pub fn is_connected(&self) -> bool { self.connected }
    pub fn is_armed(&self) -> bool { self.armed }
    pub fn is_guided(&self) -> bool { self.guided }
    pub fn mode(&self) -> &str { self.mode.as_str() }
}
