use super::command_ack::CommandAckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /navigation/arm endpoint.
#[derive(Debug)]
pub(crate) struct ArmRequest {}

impl NoBodyHTTPRequestType for ArmRequest {}

impl HTTPRequestType for ArmRequest {
    /// Type of the expected response.
    type Response = CommandAckResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/navigation/arm" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
