use super::http_request::request_common::RequestError;
use std::time::Duration;

/// A simple wrapper around `reqwest::blocking::Client` used to manage HTTP
/// requests with a preconfigured base URL and default settings.
///
/// This client is used for making the one REST API call to the OpenSky
/// backend. It sets a fixed timeout and allows easy reuse of the HTTP client
/// infrastructure by the request types in this module.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::blocking::Client` used to perform HTTP requests.
    client: reqwest::blocking::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Upper bound on one whole request/response cycle. A server that never
    /// answers fails the request instead of blocking the process forever.
    pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// The client uses the default request timeout of [`Self::DEFAULT_TIMEOUT`].
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests
    ///   (e.g., `"https://opensky-network.org/api"`).
    ///
    /// # Returns
    /// A configured `HTTPClient` instance, or [`RequestError::ClientBuild`]
    /// if the underlying client could not be initialized.
    pub(crate) fn new(base_url: &str) -> Result<HTTPClient, RequestError> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    /// Constructs a new `HTTPClient` with the given base URL and an explicit
    /// request timeout.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests.
    /// * `timeout` – Upper bound on the whole request/response cycle.
    ///
    /// # Returns
    /// A configured `HTTPClient` instance, or [`RequestError::ClientBuild`]
    /// if the underlying client could not be initialized.
    pub(crate) fn with_timeout(
        base_url: &str,
        timeout: Duration,
    ) -> Result<HTTPClient, RequestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|_| RequestError::ClientBuild)?;
        Ok(HTTPClient { client, base_url: String::from(base_url) })
    }

    /// Returns a reference to the internal `reqwest::blocking::Client`.
    pub(super) fn client(&self) -> &reqwest::blocking::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
}
