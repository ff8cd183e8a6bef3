use super::namespace::NamespaceResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /get_global_namespace endpoint.
#[derive(Debug)]
pub(crate) struct NamespaceRequest {}

impl NoBodyHTTPRequestType for NamespaceRequest {}

impl HTTPRequestType for NamespaceRequest {
    /// Type of the expected response.
    type Response = NamespaceResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/get_global_namespace" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    /// The namespace lookup itself lives outside any namespace.
    fn namespaced(&self) -> bool { false }
}
