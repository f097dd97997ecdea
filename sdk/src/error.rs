use thiserror::Error;

/// The error type for the Burrow client.
///
/// Only malformed caller input is reported through this type. Failures that
/// happen while talking to the service (network, decoding, error envelopes)
/// are absorbed by the client methods and surface as `None` or `false`.
#[derive(Debug, Error)]
pub enum BurrowError {
    /// A caller supplied value cannot be used (port, HTTP verb, etc.).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    #[error("Cannot parse configuration")]
    CannotParseConfiguration(#[from] toml::de::Error),
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("Request middleware error")]
    RequestMiddlewareError(#[from] reqwest_middleware::Error),
}
