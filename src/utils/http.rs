//! HTTP client utilities.

use std::time::Duration;

/// Shared blocking HTTP client with the engine's fixed defaults.
///
/// The remote service is an unauthenticated public read API; every request
/// carries the same browser-like user agent and the same timeout. Per-request
/// headers (such as the node page referer) are added by the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with the given user agent and request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Start a GET request for the given URL.
    pub fn get(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        self.client.get(url)
    }
}
