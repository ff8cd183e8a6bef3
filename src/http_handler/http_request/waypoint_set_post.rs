use super::command_ack::CommandAckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::flight_control::Waypoint;

/// Request type for the /navigation/waypoint_set endpoint.
///
/// Replaces the complete mission stored on the autopilot.
#[derive(serde::Serialize, Debug)]
pub(crate) struct WaypointSetRequest<'a> {
    /// Ordered mission items, serialized as `{"waypoints": [...]}`.
    pub(crate) waypoints: &'a [Waypoint],
}

impl JSONBodyHTTPRequestType for WaypointSetRequest<'_> {
    /// The type of the json body.
    type Body = Self;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for WaypointSetRequest<'_> {
    /// Type of the expected response.
    type Response = CommandAckResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/navigation/waypoint_set" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
