use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /get_global_namespace endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct NamespaceResponse {
    param_info: ParamInfo,
}

#[derive(serde::Deserialize, Debug)]
struct ParamInfo {
    param_value: String,
}

impl SerdeJSONBodyHTTPResponseType for NamespaceResponse {}

impl NamespaceResponse {
    pub fn namespace(&self) -> &str { self.param_info.param_value.as_str() }
}
