pub mod http_client;
pub mod http_request;
pub mod http_response;
mod common;

pub(crate) use common::HTTPError;

#[cfg(test)]
pub(crate) mod tests;
