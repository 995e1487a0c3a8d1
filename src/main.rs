#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod flight_data;
mod http_handler;
mod logger;

use crate::flight_data::FlightStateFetcher;
use crate::http_handler::http_client::HTTPClient;
use std::{env, process::ExitCode};

fn main() -> ExitCode {
    let base_url_var = env::var("OPENSKY_BASE_URL");
    let base_url = base_url_var.as_ref().map_or("https://opensky-network.org/api", |v| v.as_str());
    if base_url_var.is_ok() {
        warn!("Base URL overridden to {base_url}");
    }
    let client = HTTPClient::new(base_url)
        .unwrap_or_else(|e| fatal!("Could not build the HTTP client ({e})"));
    match FlightStateFetcher::new(client).fetch() {
        Ok(_states) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
