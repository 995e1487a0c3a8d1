pub(crate) mod response_common;
pub mod flight_states;
