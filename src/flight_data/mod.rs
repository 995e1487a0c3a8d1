mod bounding_box;
mod state_fetcher;

pub use bounding_box::BoundingBox;
pub use state_fetcher::{FetchPhase, FlightStateFetcher};
