use strum_macros::Display;

/// Response types whose body is read verbatim as text. The OpenSky state
/// payload is treated as opaque: whatever the server sent back is handed
/// to the caller unparsed.
pub(crate) trait TextBodyHTTPResponseType: HTTPResponseType {
    fn parse_text_body(response: reqwest::blocking::Response) -> Result<String, ResponseError> {
        Ok(response.text()?)
    }
}

/// Common contract of one typed API response.
pub(crate) trait HTTPResponseType {
    type ParsedResponseType;

    fn read_response(
        response: reqwest::blocking::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Classifies the HTTP status before any body handling. Only 2xx
    /// responses pass through; everything else surfaces as a distinct
    /// error carrying the numeric code.
    fn unwrap_return_code(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer { code: status.as_u16() })
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest { code: status.as_u16() })
        } else {
            Err(ResponseError::UnexpectedStatus { code: status.as_u16() })
        }
    }
}

/// Errors raised while reading a response that did arrive.
#[derive(Debug, Display)]
pub(crate) enum ResponseError {
    /// Server answered with a 5xx status code.
    InternalServer { code: u16 },
    /// Server rejected the request with a 4xx status code.
    BadRequest { code: u16 },
    /// Status outside the success, client error and server error classes.
    UnexpectedStatus { code: u16 },
    /// A response arrived but its body could not be read as text.
    UnreadableBody,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(_: reqwest::Error) -> Self { ResponseError::UnreadableBody }
}
