use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Top-level error of one request/response cycle, split by the phase the
/// failure occurred in.
#[derive(Debug, Display)]
pub(crate) enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}
