use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker for responses that deserialize directly from their JSON body.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = if status.is_client_error() { response.text().await? } else { String::new() };
        Err(ResponseError::from_status(status, body))
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    /// 5xx status code.
    InternalServer(u16),
    /// 4xx status code together with the raw body.
    BadRequest(u16, String),
    /// The body did not match the expected JSON shape.
    Decode,
    /// No response within the client timeout.
    Timeout,
    NoConnection,
    Unknown,
}

impl ResponseError {
    /// Classifies a non-success status. `body` is only kept for 4xx codes.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        if status.is_server_error() {
            ResponseError::InternalServer(status.as_u16())
        } else if status.is_client_error() {
            ResponseError::BadRequest(status.as_u16(), body)
        } else {
            ResponseError::Unknown
        }
    }
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ResponseError::Decode
        } else if value.is_timeout() {
            ResponseError::Timeout
        } else if let Some(status) = value.status() {
            ResponseError::from_status(status, String::new())
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}
