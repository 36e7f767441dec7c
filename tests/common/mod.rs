//! Shared test helpers.

#![allow(dead_code)]

use dns_domain_client::DnsClient;
use wiremock::MockServer;

/// API key used by every mock-backed test.
pub const TEST_API_KEY: &str = "test-api-key";

/// Start a mock server and a client pointed at it.
pub async fn mock_client() -> (MockServer, DnsClient) {
    let server = MockServer::start().await;
    let client = DnsClient::new(server.uri(), TEST_API_KEY);
    (server, client)
}
