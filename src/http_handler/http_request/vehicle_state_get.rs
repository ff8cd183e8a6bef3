use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::vehicle_state::VehicleStateResponse;

/// Request type for the /flyt/state endpoint.
#[derive(Debug)]
pub(crate) struct VehicleStateRequest {}

impl NoBodyHTTPRequestType for VehicleStateRequest {}

impl HTTPRequestType for VehicleStateRequest {
    type Response = VehicleStateResponse;
    fn endpoint(&self) -> &'static str { "/flyt/state" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
