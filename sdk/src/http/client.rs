use crate::error::BurrowError;
use crate::http::config::{BurrowClientConfig, ClientOptions};
use crate::http::transport::ReqwestTransport;
use crate::http::{Headers, HttpMethod, HttpRequest, HttpTransport, RequestBody};
use crate::models::envelope::Envelope;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, trace, warn};

/// HTTP client for interacting with the Burrow API.
/// It requires the host and port of a running Burrow instance.
#[derive(Debug)]
pub struct BurrowClient<T = ReqwestTransport> {
    config: BurrowClientConfig,
    transport: T,
}

impl BurrowClient<ReqwestTransport> {
    /// Create a new client for `host:port`. Fails only when the port is not a valid integer.
    pub fn new(host: &str, port: impl Display, options: ClientOptions) -> Result<Self, BurrowError> {
        Self::create(BurrowClientConfig::new(host, port, options)?)
    }

    pub fn create(config: BurrowClientConfig) -> Result<Self, BurrowError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> BurrowClient<T> {
    pub fn with_transport(config: BurrowClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &BurrowClientConfig {
        &self.config
    }

    pub fn get_url(&self, endpoint: &str) -> Result<Url, BurrowError> {
        Url::parse(&format!("{}{}", self.config.base_url(), endpoint))
            .map_err(|_| BurrowError::CannotParseUrl)
    }

    /// Dispatch a request and decode the response envelope.
    ///
    /// An unsupported method or an unusable URL is an error. A failed
    /// exchange or a body that is not a JSON object yields `Ok(None)`.
    pub async fn request(
        &self,
        endpoint: &str,
        method: &str,
        data: Option<RequestBody>,
        headers: impl Into<Headers>,
    ) -> Result<Option<Envelope>, BurrowError> {
        let method = HttpMethod::from_str(method)?;
        let request = HttpRequest {
            method,
            url: self.get_url(endpoint)?,
            headers: headers.into(),
            content_type: data.as_ref().and_then(RequestBody::content_type),
            body: data.map(|data| data.encode()),
            timeout: self.config.options.request_timeout(),
        };

        trace!("Sending {method} request to {endpoint}...");
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!("{method} request to {endpoint} failed: {error}");
                return Ok(None);
            }
        };

        debug!(
            "Received response with status {} for {method} {endpoint}",
            response.status
        );
        let envelope = Envelope::from_json(&response.body);
        if envelope.is_none() {
            warn!("Response for {method} {endpoint} is not a JSON object");
        }
        Ok(envelope)
    }

    /// Dispatch a request without payload and keep the envelope only if it reports success.
    pub(crate) async fn call(&self, endpoint: &str, method: HttpMethod) -> Option<Envelope> {
        let envelope = match self
            .request(endpoint, method.as_str(), None, Headers::new())
            .await
        {
            Ok(envelope) => envelope?,
            Err(error) => {
                warn!("Cannot send {method} request to {endpoint}: {error}");
                return None;
            }
        };

        if !envelope.is_success() {
            warn!(
                "Burrow returned an error for {method} {endpoint}: {}",
                envelope.message().unwrap_or("no message")
            );
            return None;
        }

        Some(envelope)
    }

    /// GET the endpoint and decode the named payload field of a successful envelope.
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, endpoint: &str, field: &str) -> Option<R> {
        let envelope = self.call(endpoint, HttpMethod::Get).await?;
        match envelope.into_field(field) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!("Cannot decode field '{field}' returned by {endpoint}: {error}");
                None
            }
        }
    }
}
