use super::http_response::flight_states;

pub mod flight_states_get;
pub mod request_common;
