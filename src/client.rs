//! Client construction.

use std::time::Duration;

use reqwest::Client;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for a DNS domain management REST API.
///
/// Holds the provider endpoint, the API key sent with every request, and a
/// shared connection pool. Cloning is cheap and clones share the pool, so a
/// single client can be used freely across tasks; no method mutates shared
/// state.
#[derive(Clone)]
pub struct DnsClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl DnsClient {
    /// Create a client targeting `base_url`, authenticating with `api_key`.
    ///
    /// `base_url` is the provider endpoint without a trailing slash, e.g.
    /// `https://api.example-dns.com`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The provider endpoint this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Create an HTTP client with timeout configuration.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_stripped() {
        let c = DnsClient::new("https://api.example.com/", "key");
        assert_eq!(c.base_url(), "https://api.example.com");
    }

    #[test]
    fn base_url_kept_verbatim_otherwise() {
        let c = DnsClient::new("http://127.0.0.1:8080", "key");
        assert_eq!(c.base_url(), "http://127.0.0.1:8080");
    }
}
