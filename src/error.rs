//! Error types for the CoinMarketCap client library.

use thiserror::Error;

/// The main error type for all CoinMarketCap client operations.
///
/// HTTP status codes are never turned into errors: a 4xx/5xx response with a
/// JSON body is returned to the caller like any other response, and the
/// envelope's `status.error_code` tells the two apart.
#[derive(Error, Debug)]
pub enum CoinMarketCapError {
    /// No API key was supplied when the client was built
    #[error("Missing credentials: an API key is required but was not provided")]
    MissingCredentials,

    /// Request parameters were rejected before any network access
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configured header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// A custom transport reported a failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be parsed as JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query string encoding error
    #[error("Query encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl CoinMarketCapError {
    /// Build an [`CoinMarketCapError::InvalidArgument`] from a message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// The client could not be constructed from its configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredentials | Self::InvalidHeader(_))
    }

    /// The call was rejected before reaching the transport.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// The round trip itself failed, or its body was not JSON.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpMiddleware(_) | Self::Transport(_) | Self::InvalidResponse(_)
        )
    }
}
