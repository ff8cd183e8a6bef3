use super::super::{common::HTTPError, http_client::HTTPClient};
use super::response_common::HTTPResponseType;
use strum_macros::Display;

/// HTTP verbs used by the FlytOS REST interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Common description of a single REST endpoint.
pub(crate) trait HTTPRequestType {
    /// Type used to read and parse the response.
    type Response: HTTPResponseType;
    /// Endpoint path, relative to `/ros/<namespace>` (or `/ros` if not namespaced).
    fn endpoint(&self) -> &'static str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Whether the endpoint lives below the vehicle namespace.
    fn namespaced(&self) -> bool { true }

    /// Prepares a `reqwest::RequestBuilder` for this endpoint.
    fn request_builder(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let url = client.endpoint_url(self.endpoint(), self.namespaced());
        client.client().request(self.request_method().into(), url)
    }
}

/// Requests without a body (plain GET/POST triggers).
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self.request_builder(client).send().await.map_err(RequestError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

/// Requests carrying a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self
            .request_builder(client)
            .json(self.body())
            .send()
            .await
            .map_err(RequestError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

/// Errors that occur before a response was received.
#[derive(Debug, Display)]
pub enum RequestError {
    /// The request could not be built (bad URL, body not serializable).
    Builder,
    /// No connection to the FlytOS web server.
    NoConnection,
    /// The server did not answer within the client timeout.
    Timeout,
    Unknown,
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_builder() || value.is_body() {
            RequestError::Builder
        } else if value.is_timeout() {
            RequestError::Timeout
        } else if value.is_connect() {
            RequestError::NoConnection
        } else {
            RequestError::Unknown
        }
    }
}
