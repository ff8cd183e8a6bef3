use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Acknowledgement returned by the FlytOS navigation services
/// (arm, `waypoint_set`, `waypoint_execute`).
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandAckResponse {
    /// Whether the vehicle accepted the command.
    success: bool,
    /// Explanation, usually only set on rejection.
    #[serde(default)]
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for CommandAckResponse {}

impl CommandAckResponse {
    pub fn is_success(&self) -> bool { self.success }
    pub fn message(&self) -> &str { self.message.as_str() }
}
