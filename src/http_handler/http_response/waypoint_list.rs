use crate::flight_control::Waypoint;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /navigation/waypoint_get endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct WaypointListResponse {
    success: bool,
    /// Number of mission items the autopilot reports.
    wp_received: usize,
    #[serde(default)]
    waypoints: Vec<Waypoint>,
}

impl SerdeJSONBodyHTTPResponseType for WaypointListResponse {}

impl WaypointListResponse {
    pub fn is_success(&self) -> bool { self.success }
    pub fn wp_received(&self) -> usize { self.wp_received }
    pub fn waypoints(&self) -> &[Waypoint] { &self.waypoints }
}
