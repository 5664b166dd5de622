//! Request building and execution shared by both clients.

use reqwest::Method;
use reqwest::header::{ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::CoinMarketCapError;
use crate::transport::{HttpRequest, Transport};

/// Per-request configuration: method, headers and an optional JSON body.
///
/// Clients keep one base configuration and copy it for each call, overlaying
/// the method and body. The base is never mutated by a request.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// HTTP method.
    pub method: Method,
    /// Headers sent with the request.
    pub headers: HeaderMap,
    /// JSON body.
    pub body: Option<Value>,
}

impl RequestConfig {
    /// The fixed baseline: `GET` with JSON accept headers.
    pub fn baseline() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("utf-8"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("deflate, gzip"));

        Self {
            method: Method::GET,
            headers,
            body: None,
        }
    }

    /// Copy of this configuration turned into a `POST` with a JSON body.
    pub fn with_json_body<B>(&self, body: &B) -> Result<Self, CoinMarketCapError>
    where
        B: Serialize + ?Sized,
    {
        Ok(Self {
            method: Method::POST,
            headers: self.headers.clone(),
            body: Some(serde_json::to_value(body)?),
        })
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Append an URL-encoded query string to `base`.
///
/// Nothing is appended when `query` is `None` or serializes to an empty
/// string; `?` is never emitted on its own.
pub fn build_url<Q>(base: &str, query: Option<&Q>) -> Result<Url, CoinMarketCapError>
where
    Q: Serialize + ?Sized,
{
    let query_string = match query {
        Some(query) => serde_urlencoded::to_string(query)?,
        None => String::new(),
    };

    let url = if query_string.is_empty() {
        Url::parse(base)?
    } else {
        Url::parse(&format!("{}?{}", base, query_string))?
    };
    Ok(url)
}

/// Build the URL, perform one round trip through `transport`, parse JSON.
///
/// The status code is not inspected: an error status with a JSON body is
/// returned as a normal value. Only transport failures and non-JSON bodies
/// produce errors.
pub async fn execute<Q>(
    transport: &dyn Transport,
    url: &str,
    config: &RequestConfig,
    query: Option<&Q>,
) -> Result<Value, CoinMarketCapError>
where
    Q: Serialize + ?Sized,
{
    let url = build_url(url, query)?;
    tracing::debug!(method = %config.method, url = %url, "sending request");

    let response = transport
        .fetch(HttpRequest {
            method: config.method.clone(),
            url,
            headers: config.headers.clone(),
            body: config.body.clone(),
        })
        .await?;

    tracing::debug!(status = %response.status, bytes = response.body.len(), "received response");
    if !response.status.is_success() {
        tracing::warn!(status = %response.status, "passing through non-success response");
    }

    response.json().inspect_err(|e| {
        tracing::warn!("Failed to parse response body: {}", e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingTransport;
    use reqwest::StatusCode;

    #[derive(Serialize)]
    struct Query {
        #[serde(skip_serializing_if = "Option::is_none")]
        convert: Option<String>,
    }

    #[test]
    fn test_build_url_without_query() {
        let url = build_url::<Query>("https://example.com/v1/path", None).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/path");

        let url = build_url("https://example.com/v1/path", Some(&Query { convert: None })).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/path");
    }

    #[test]
    fn test_build_url_with_query() {
        let query = Query {
            convert: Some("USD,EUR".to_string()),
        };
        let url = build_url("https://example.com/v1/path", Some(&query)).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/path?convert=USD%2CEUR");
    }

    #[test]
    fn test_execute_passes_through_error_status() {
        let transport = RecordingTransport::responding(
            StatusCode::UNAUTHORIZED,
            r#"{"status":{"error_code":1002,"error_message":"API key missing."}}"#,
        );
        let value = tokio_test::block_on(execute::<Query>(
            &transport,
            "https://example.com/v1/path",
            &RequestConfig::baseline(),
            None,
        ))
        .unwrap();

        assert_eq!(value["status"]["error_code"], 1002);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_execute_rejects_non_json() {
        let transport = RecordingTransport::responding(StatusCode::OK, "not json");
        let err = tokio_test::block_on(execute::<Query>(
            &transport,
            "https://example.com/v1/path",
            &RequestConfig::baseline(),
            None,
        ))
        .unwrap_err();

        assert!(err.is_transport());
    }

    #[test]
    fn test_post_body_does_not_touch_base() {
        let base = RequestConfig::baseline();
        let post = base.with_json_body(&serde_json::json!({ "pageSize": 16 })).unwrap();
        assert_eq!(post.method, Method::POST);
        assert_eq!(post.body.unwrap()["pageSize"], 16);
        assert_eq!(base.method, Method::GET);
        assert!(base.body.is_none());
    }
}
