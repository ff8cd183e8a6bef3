use super::command_ack::CommandAckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /navigation/waypoint_execute endpoint.
#[derive(Debug)]
pub(crate) struct WaypointExecuteRequest {}

impl NoBodyHTTPRequestType for WaypointExecuteRequest {}

impl HTTPRequestType for WaypointExecuteRequest {
    /// Type of the expected response.
    type Response = CommandAckResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/navigation/waypoint_execute" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
