use crate::error::BurrowError;
use crate::http::{parse_header, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use ::http::Extensions;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next};
use std::time::Instant;
use tracing::{debug, warn};

/// The default transport, `reqwest` with a logging middleware and no retries.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, BurrowError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        let client = ClientBuilder::new(client).with(TracingMiddleware).build();
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BurrowError> {
        let mut headers = build_headers(&request);
        if let Some(content_type) = request.content_type {
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
            }
        }

        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

fn build_headers(request: &HttpRequest) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(request.headers.len());
    for line in request.headers.iter() {
        match to_header(line) {
            Ok((name, value)) => {
                headers.append(name, value);
            }
            Err(error) => warn!("Skipping header: {error}"),
        }
    }
    headers
}

fn to_header(line: &str) -> Result<(HeaderName, HeaderValue), BurrowError> {
    let (name, value) = parse_header(line)?;
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| BurrowError::InvalidHeader(line.to_string()))?;
    let value =
        HeaderValue::from_str(value).map_err(|_| BurrowError::InvalidHeader(line.to_string()))?;
    Ok((name, value))
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Post => Method::POST,
            HttpMethod::Options => Method::OPTIONS,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Logs every exchange with its status and duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMiddleware;

#[async_trait]
impl Middleware for TracingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        let started_at = Instant::now();
        let result = next.run(request, extensions).await;
        let elapsed = started_at.elapsed().as_millis();
        match &result {
            Ok(response) => debug!("{method} {url} -> {} in {elapsed} ms", response.status()),
            Err(error) => warn!("{method} {url} failed after {elapsed} ms: {error}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Headers;
    use reqwest::Url;

    fn request(headers: Headers) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: Url::parse("http://localhost:8000/v2/kafka").unwrap(),
            headers,
            content_type: None,
            body: None,
            timeout: None,
        }
    }

    #[test]
    fn valid_header_lines_should_be_converted() {
        let headers = build_headers(&request(Headers::from(vec![
            "Accept: application/json",
            "X-Request-Id: 42",
        ])));
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert_eq!(headers.get("x-request-id").unwrap(), "42");
    }

    #[test]
    fn invalid_header_lines_should_be_skipped() {
        let headers = build_headers(&request(Headers::from(vec![
            "no separator",
            "Bad Name: value",
            "X-Ok: yes",
        ])));
        assert_eq!(headers.len(), 1);
        assert!(headers.contains_key("x-ok"));
    }

    #[test]
    fn method_should_map_to_reqwest_method() {
        assert_eq!(Method::from(HttpMethod::Delete), Method::DELETE);
        assert_eq!(Method::from(HttpMethod::Options), Method::OPTIONS);
    }
}
