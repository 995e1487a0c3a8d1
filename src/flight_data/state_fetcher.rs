use super::bounding_box::BoundingBox;
use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::flight_states_get::FlightStatesRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::{error, info, log};
use strum_macros::Display;

/// Lifecycle of one fetch. There is no path back to `Idle`: the fetcher
/// is consumed by [`FlightStateFetcher::fetch`] and ends in a terminal
/// phase.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    InFlight,
    Completed,
    Failed,
}

/// Issues the one blocking `/states/all` request against the configured
/// backend and yields the raw response body.
///
/// The bounding box is fixed at construction and identical for every
/// instance; no caller input reaches the query.
#[derive(Debug)]
pub struct FlightStateFetcher {
    request_client: HTTPClient,
    bbox: BoundingBox,
    phase: FetchPhase,
}

impl FlightStateFetcher {
    pub fn new(request_client: HTTPClient) -> Self {
        Self {
            request_client,
            bbox: BoundingBox::PARIS,
            phase: FetchPhase::Idle,
        }
    }

    /// The phase the fetcher is currently in.
    pub fn phase(&self) -> FetchPhase { self.phase }

    /// Performs the single request/response cycle and returns the body
    /// text. Consumes the fetcher: one instance maps to exactly one
    /// outbound request.
    pub fn fetch(mut self) -> Result<String, HTTPError> {
        self.advance(FetchPhase::InFlight);
        info!(
            "Requesting flight states in {} from {}",
            self.bbox,
            self.request_client.url()
        );
        let res = FlightStatesRequest { bbox: self.bbox }.send_request(&self.request_client);
        match &res {
            Ok(body) => {
                self.advance(FetchPhase::Completed);
                log!("Received {} bytes of state data", body.len());
            }
            Err(err) => {
                self.advance(FetchPhase::Failed);
                error!("No state data received: {err:?}");
            }
        }
        res
    }

    fn advance(&mut self, next: FetchPhase) {
        log!("Fetch phase {} -> {next}", self.phase);
        self.phase = next;
    }
}
