use super::flight_states::FlightStatesResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::flight_data::BoundingBox;

/// Request type for the /states/all endpoint.
#[derive(Debug)]
pub(crate) struct FlightStatesRequest {
    /// The geographic rectangle the query is bounded to.
    pub(crate) bbox: BoundingBox,
}

impl NoBodyHTTPRequestType for FlightStatesRequest {}

impl HTTPRequestType for FlightStatesRequest {
    /// Type of the expected response.
    type Response = FlightStatesResponse;
    /// The bounding box doubles as the full query parameter set.
    type Query = BoundingBox;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/states/all" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    /// Returns the serializable query set.
    fn query_params(&self) -> &Self::Query { &self.bbox }
}
