#![allow(dead_code)]

use async_trait::async_trait;
use burrow::error::BurrowError;
use burrow::http::client::BurrowClient;
use burrow::http::config::{BurrowClientConfig, ClientOptions};
use burrow::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use mockall::mock;
use tracing_subscriber::EnvFilter;

pub const NOT_JSON: &str = "<html><body>502 Bad Gateway</body></html>";
pub const ERROR_ENVELOPE: &str = r#"{"error": true, "message": "cluster not found"}"#;

mock! {
    pub Transport {}

    #[async_trait]
    impl HttpTransport for Transport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BurrowError>;
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn client(transport: MockTransport) -> BurrowClient<MockTransport> {
    init_tracing();
    let config = BurrowClientConfig::new("http://burrow.local", 8000, ClientOptions::default())
        .expect("valid configuration");
    BurrowClient::with_transport(config, transport)
}

/// A client expecting exactly one `method` request to `path`, answered with `body`.
pub fn client_responding(
    method: HttpMethod,
    path: &'static str,
    body: &'static str,
) -> BurrowClient<MockTransport> {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(move |request| request.method == method && request.url.path() == path)
        .times(1)
        .returning(move |_| Ok(HttpResponse::new(200, body)));
    client(transport)
}

/// A client answering every request with the same status and body.
pub fn client_always_responding(status: u16, body: &'static str) -> BurrowClient<MockTransport> {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .returning(move |_| Ok(HttpResponse::new(status, body)));
    client(transport)
}

/// A client whose every request fails in the transport.
pub fn client_unreachable() -> BurrowClient<MockTransport> {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .returning(|_| Err(BurrowError::InvalidArgument("connection refused".to_string())));
    client(transport)
}
