use crate::error::BurrowError;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Per-request options of the client.
///
/// Keys missing from a deserialized document fall back to the defaults
/// (`timeout = 5`, `timeout_ms = 0`). Unknown keys are kept in `extra` and
/// are never read by the client.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Request timeout in seconds, `0` disables it.
    #[builder(default = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
    /// Request timeout in milliseconds, takes precedence over `timeout` when non-zero.
    #[builder(default)]
    pub timeout_ms: u64,
    #[serde(flatten)]
    #[builder(default)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            timeout: DEFAULT_TIMEOUT_SECS,
            timeout_ms: 0,
            extra: BTreeMap::new(),
        }
    }
}

impl ClientOptions {
    pub fn from_toml(content: &str) -> Result<Self, BurrowError> {
        let options = toml::from_str(content)?;
        Ok(options)
    }

    /// The single timeout applied to every request, the most precise unit wins.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.timeout_ms > 0 {
            return Some(Duration::from_millis(self.timeout_ms));
        }

        if self.timeout > 0 {
            return Some(Duration::from_secs(self.timeout));
        }

        None
    }
}

/// Connection parameters of a `BurrowClient`, immutable once the client is built.
#[derive(Debug, Clone, PartialEq)]
pub struct BurrowClientConfig {
    pub host: String,
    pub port: u16,
    pub options: ClientOptions,
}

impl Default for BurrowClientConfig {
    fn default() -> BurrowClientConfig {
        BurrowClientConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            options: ClientOptions::default(),
        }
    }
}

impl BurrowClientConfig {
    /// Validates the port and strips the `http://`/`https://` prefix and trailing `/` from the host.
    pub fn new(host: &str, port: impl Display, options: ClientOptions) -> Result<Self, BurrowError> {
        let port = parse_port(&port.to_string())?;
        Ok(BurrowClientConfig {
            host: strip_scheme(host).trim_end_matches('/').to_string(),
            port,
            options,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_port(value: &str) -> Result<u16, BurrowError> {
    value.trim().parse::<u16>().map_err(|_| {
        BurrowError::InvalidArgument(format!(
            "port must be a non-negative integer up to {}, got '{value}'",
            u16::MAX
        ))
    })
}

fn strip_scheme(host: &str) -> &str {
    for scheme in SCHEMES {
        if let Some(prefix) = host.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                return &host[scheme.len()..];
            }
        }
    }
    host
}
