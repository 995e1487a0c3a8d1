use super::super::common::HTTPError;
use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::HTTPResponseType;
use strum_macros::Display;

/// The HTTP method a request type maps to. The OpenSky state endpoint is
/// read-only, so only `Get` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Get,
}

/// Common contract of one typed API request.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Serializable query parameter set appended to the endpoint URL.
    type Query: serde::Serialize;

    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Returns the serializable query set.
    fn query_params(&self) -> &Self::Query;
    /// Additional header fields sent with the request.
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

/// Request types that carry no body. Provides the blocking send path:
/// the call does not return until a response arrived, the timeout
/// elapsed, or the transport failed.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let request = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(url),
        }
        .query(self.query_params())
        .headers(self.header_params());
        let response = request
            .send()
            .map_err(|e| HTTPError::HTTPRequestError(RequestError::from(e)))?;
        Self::Response::read_response(response).map_err(HTTPError::HTTPResponseError)
    }
}

/// Errors raised while issuing a request, before any response is read.
#[derive(Debug, Display)]
pub(crate) enum RequestError {
    /// The HTTP client could not be initialized.
    ClientBuild,
    /// The remote host could not be reached (DNS failure, refused or
    /// reset connection).
    NoConnection,
    /// The configured timeout elapsed before a response arrived.
    Timeout,
    /// Any other transport failure while sending.
    Unknown,
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            RequestError::Timeout
        } else if value.is_connect() {
            RequestError::NoConnection
        } else {
            RequestError::Unknown
        }
    }
}
