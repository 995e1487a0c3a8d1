use crate::http_handler::http_response::response_common::{
    HTTPResponseType, ResponseError, TextBodyHTTPResponseType,
};

/// Response type for the /states/all endpoint. The body is expected to be
/// a JSON document of aircraft state vectors, but it is never parsed: the
/// caller receives the exact text the server returned.
pub(crate) struct FlightStatesResponse {}

impl TextBodyHTTPResponseType for FlightStatesResponse {}

impl HTTPResponseType for FlightStatesResponse {
    /// Type of the parsed response.
    type ParsedResponseType = String;

    /// Reads the response body as raw text after the status check.
    fn read_response(
        response: reqwest::blocking::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response)?;
        Self::parse_text_body(resp)
    }
}
