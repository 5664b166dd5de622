//! Client configuration shared by the private and public clients.
//!
//! Both clients go through the same bootstrap: check the API key, merge the
//! caller's default headers over the baseline, attach the client-specific
//! auth header and pick a transport. [`ClientConfig::new`] is that bootstrap.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};

use crate::auth::{CredentialsProvider, StaticCredentials};
use crate::error::CoinMarketCapError;
use crate::request::RequestConfig;
use crate::transport::{ReqwestTransport, Transport, default_user_agent};

/// Default API version.
pub const DEFAULT_VERSION: &str = "v1";

/// Header carrying the key for the Pro API.
pub const PRO_API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// How the API key is presented to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthScheme {
    /// `X-CMC_PRO_API_KEY: <key>`
    ProApiKey,
    /// `Authorization: Basic <key>`
    Basic,
}

impl AuthScheme {
    fn header(self, api_key: &str) -> Result<(HeaderName, HeaderValue), CoinMarketCapError> {
        let (name, value) = match self {
            AuthScheme::ProApiKey => (
                HeaderName::from_static("x-cmc_pro_api_key"),
                HeaderValue::from_str(api_key),
            ),
            AuthScheme::Basic => (
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Basic {}", api_key)),
            ),
        };
        let mut value = value.map_err(|_| {
            CoinMarketCapError::InvalidHeader("API key is not a valid header value".to_string())
        })?;
        value.set_sensitive(true);
        Ok((name, value))
    }
}

/// Caller-supplied settings common to both client builders.
#[derive(Clone)]
pub(crate) struct ClientOptions {
    pub(crate) credentials: Option<Arc<dyn CredentialsProvider>>,
    pub(crate) version: String,
    pub(crate) transport: Option<Arc<dyn Transport>>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) user_agent: Option<String>,
}

impl ClientOptions {
    pub(crate) fn new() -> Self {
        Self {
            credentials: None,
            version: DEFAULT_VERSION.to_string(),
            transport: None,
            headers: Vec::new(),
            user_agent: None,
        }
    }

    pub(crate) fn api_key(&mut self, api_key: impl Into<String>) {
        self.credentials = Some(Arc::new(StaticCredentials::new(api_key)));
    }
}

/// Immutable configuration owned by a client.
pub(crate) struct ClientConfig {
    pub(crate) version: String,
    pub(crate) request: RequestConfig,
    pub(crate) transport: Arc<dyn Transport>,
}

impl ClientConfig {
    /// Validate the options and assemble the base request configuration.
    pub(crate) fn new(
        options: ClientOptions,
        scheme: AuthScheme,
    ) -> Result<Self, CoinMarketCapError> {
        let credentials = options
            .credentials
            .ok_or(CoinMarketCapError::MissingCredentials)?;
        let credentials = credentials.get_credentials();
        if credentials.is_blank() {
            return Err(CoinMarketCapError::MissingCredentials);
        }

        let mut request = RequestConfig::baseline();
        for (name, value) in &options.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CoinMarketCapError::InvalidHeader(format!("{}: {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| CoinMarketCapError::InvalidHeader(format!("{}: {}", name, e)))?;
            request.headers.insert(header_name, header_value);
        }

        let (auth_name, auth_value) = scheme.header(credentials.expose_api_key())?;
        request.headers.insert(auth_name, auth_value);

        let transport = options.transport.unwrap_or_else(|| {
            let user_agent = options.user_agent.unwrap_or_else(default_user_agent);
            Arc::new(ReqwestTransport::with_user_agent(user_agent))
        });

        tracing::debug!(version = %options.version, ?scheme, "client configured");

        Ok(Self {
            version: options.version,
            request,
            transport,
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("version", &self.version)
            .field("headers", &self.request.headers)
            .finish_non_exhaustive()
    }
}
