use crate::error::BurrowError;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub mod client;
pub mod clusters;
pub mod config;
pub mod consumers;
pub mod topics;
pub mod transport;

/// Root of every Burrow v2 endpoint.
pub const KAFKA_PATH: &str = "/v2/kafka";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Bytes escaped in a single path segment, `/` included so a name can't address another endpoint.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The network seam of the client. A transport performs exactly one HTTP exchange per call.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the status and the raw body, whatever the status is.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BurrowError>;
}

/// HTTP verbs accepted by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Options,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = BurrowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "HEAD" => Ok(HttpMethod::Head),
            "POST" => Ok(HttpMethod::Post),
            "OPTIONS" => Ok(HttpMethod::Options),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(BurrowError::InvalidArgument(format!(
                "unsupported HTTP method '{value}'"
            ))),
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw `Name: value` header lines sent along with a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<String>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if one of the lines sets the given header name (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|line| {
            parse_header(line)
                .map(|(header, _)| header.eq_ignore_ascii_case(name))
                .unwrap_or(false)
        })
    }
}

impl From<&str> for Headers {
    fn from(line: &str) -> Self {
        Headers(vec![line.to_string()])
    }
}

impl From<String> for Headers {
    fn from(line: String) -> Self {
        Headers(vec![line])
    }
}

impl From<Vec<String>> for Headers {
    fn from(lines: Vec<String>) -> Self {
        Headers(lines)
    }
}

impl From<Vec<&str>> for Headers {
    fn from(lines: Vec<&str>) -> Self {
        Headers(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Headers {
    fn from(lines: &[&str]) -> Self {
        Headers(lines.iter().map(|line| line.to_string()).collect())
    }
}

/// Splits a `Name: value` header line.
pub fn parse_header(line: &str) -> Result<(&str, &str), BurrowError> {
    match line.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(BurrowError::InvalidHeader(line.to_string())),
    }
}

/// Request payload: a verbatim body or form fields that get URL-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Raw(String),
    Form(Vec<(String, String)>),
}

impl RequestBody {
    pub fn form<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        RequestBody::Form(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Raw(_) => None,
            RequestBody::Form(_) => Some(FORM_CONTENT_TYPE),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            RequestBody::Raw(body) => body.clone(),
            RequestBody::Form(pairs) => url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs.iter())
                .finish(),
        }
    }
}

impl From<String> for RequestBody {
    fn from(body: String) -> Self {
        RequestBody::Raw(body)
    }
}

impl From<&str> for RequestBody {
    fn from(body: &str) -> Self {
        RequestBody::Raw(body.to_string())
    }
}

impl From<Vec<(String, String)>> for RequestBody {
    fn from(pairs: Vec<(String, String)>) -> Self {
        RequestBody::Form(pairs)
    }
}

impl From<BTreeMap<String, String>> for RequestBody {
    fn from(fields: BTreeMap<String, String>) -> Self {
        RequestBody::Form(fields.into_iter().collect())
    }
}

impl From<HashMap<String, String>> for RequestBody {
    fn from(fields: HashMap<String, String>) -> Self {
        RequestBody::Form(fields.into_iter().collect())
    }
}

/// A fully resolved request handed over to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Headers,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Builds `/v2/kafka/{segment}/...` with every segment escaped.
pub fn kafka_path(segments: &[&str]) -> String {
    let mut path = KAFKA_PATH.to_string();
    for segment in segments {
        path.push('/');
        path.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    }
    path
}
