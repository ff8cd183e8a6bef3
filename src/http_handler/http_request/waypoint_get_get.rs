use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::waypoint_list::WaypointListResponse;

/// Request type for the /navigation/waypoint_get endpoint.
#[derive(Debug)]
pub(crate) struct WaypointGetRequest {}

impl NoBodyHTTPRequestType for WaypointGetRequest {}

impl HTTPRequestType for WaypointGetRequest {
    type Response = WaypointListResponse;
    fn endpoint(&self) -> &'static str { "/navigation/waypoint_get" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
