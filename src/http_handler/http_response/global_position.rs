use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /mavros/global_position/global endpoint.
///
/// Mirrors the fields of a `sensor_msgs/NavSatFix` message that are of interest here.
#[derive(serde::Deserialize, Debug)]
pub struct GlobalPositionResponse {
    latitude: f64,
    longitude: f64,
    /// Altitude above the WGS-84 ellipsoid in meters.
    #[serde(default)]
    altitude: f64,
}

impl SerdeJSONBodyHTTPResponseType for GlobalPositionResponse {}

impl GlobalPositionResponse {
    pub fn lat(&self) -> f64 { self.latitude }
    pub fn lon(&self) -> f64 { self.longitude }
    pub fn alt(&self) -> f64 { self.altitude }
}
