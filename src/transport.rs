//! The injected HTTP capability.
//!
//! Clients never talk to the network directly: every request goes through a
//! [`Transport`], which performs exactly one round trip. The default
//! [`ReqwestTransport`] wraps `reqwest` with tracing middleware; tests and
//! callers with special needs (proxies, timeouts, recording) supply their own.

use futures_util::future::BoxFuture;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use url::Url;

use crate::error::CoinMarketCapError;

/// A fully built request handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Final URL, query string included.
    pub url: Url,
    /// Headers, authentication included.
    pub headers: HeaderMap,
    /// JSON body for POST requests.
    pub body: Option<Value>,
}

/// The raw outcome of a round trip.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Create a response from a status and body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, CoinMarketCapError> {
        serde_json::from_str(&self.body).map_err(|e| {
            CoinMarketCapError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e,
                truncate(&self.body, 200)
            ))
        })
    }
}

fn truncate(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Capability performing a single HTTP round trip.
///
/// Implementations must not retry and must not interpret the status code.
pub trait Transport: Send + Sync {
    /// Send the request and return the response.
    fn fetch(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, CoinMarketCapError>>;
}

/// Default transport built on `reqwest` with request tracing.
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Create a transport with the default user agent.
    pub fn new() -> Self {
        Self::with_user_agent(default_user_agent())
    }

    /// Create a transport sending a custom user agent.
    pub fn with_user_agent(user_agent: impl AsRef<str>) -> Self {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent.as_ref())
            .unwrap_or_else(|_| HeaderValue::from_static("coinmarketcap-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::from_client(
            ClientBuilder::new(reqwest_client)
                .with(TracingMiddleware::default())
                .build(),
        )
    }

    /// Wrap an existing middleware client.
    pub fn from_client(http_client: ClientWithMiddleware) -> Self {
        Self { http_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl Transport for ReqwestTransport {
    fn fetch(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, CoinMarketCapError>> {
        Box::pin(async move {
            let mut builder = self
                .http_client
                .request(request.method, request.url)
                .headers(request.headers);

            if let Some(body) = &request.body {
                builder = builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(serde_json::to_vec(body)?);
            }

            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// User agent sent by [`ReqwestTransport::new`].
pub fn default_user_agent() -> String {
    format!("coinmarketcap-api-client/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json() {
        let response = HttpResponse::new(StatusCode::OK, r#"{"data":[],"status":{}}"#);
        let value = response.json().unwrap();
        assert!(value["data"].is_array());
    }

    #[test]
    fn test_response_not_json() {
        let response = HttpResponse::new(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
        let err = response.json().unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("short", 200), "short");
    }
}
