/// Test helpers for SDK integration tests
///
/// Fixture setup wires the client to a mock exchange; all assertions go
/// through the SDK and the recorded wire traffic.
use bitvavo_sdk::{BitvavoClient, ClientConfig};
use bitvavo_test_utils::{MockExchange, RecordedRequest};

/// Test fixture that provides a mock exchange and a client pointed at it
pub struct TestFixture {
    pub server: MockExchange,
    pub client: BitvavoClient,
}

impl TestFixture {
    /// Create a fixture with the well-known test credentials "K"/"S"
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_config(ClientConfig::default().with_credentials("K", "S")).await
    }

    /// Create a fixture from a custom configuration; the API URL is
    /// always rewritten to point at the mock exchange.
    pub async fn with_config(config: ClientConfig) -> anyhow::Result<Self> {
        let server = MockExchange::start().await?;
        let config = config.with_api_url(server.base_url.as_str());
        let client = BitvavoClient::new(config);

        Ok(Self { server, client })
    }

    /// The single request the server has seen, panicking if there were
    /// zero or several.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.server.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}
