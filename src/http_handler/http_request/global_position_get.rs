use super::global_position::GlobalPositionResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /mavros/global_position/global endpoint.
#[derive(Debug)]
pub(crate) struct GlobalPositionRequest {}

impl NoBodyHTTPRequestType for GlobalPositionRequest {}

impl HTTPRequestType for GlobalPositionRequest {
    type Response = GlobalPositionResponse;
    fn endpoint(&self) -> &'static str { "/mavros/global_position/global" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
