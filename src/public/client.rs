//! CoinMarketCap portfolio/web API client implementation.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::auth::CredentialsProvider;
use crate::config::{AuthScheme, ClientConfig, ClientOptions};
use crate::Result;
use crate::public::endpoints::{PRICE_CONVERSION_URL, PUBLIC_API_BASE_URL};
use crate::request;
use crate::transport::Transport;

/// The CoinMarketCap portfolio/web ("public") API client.
///
/// Portfolio and watchlist calls are `POST`s with a JSON body built from a
/// request whose every field falls back to a documented default. Data calls
/// are `GET`s. Authentication uses `Authorization: Basic {key}`.
///
/// # Example
///
/// ```rust,no_run
/// use coinmarketcap_api_client::public::{PublicApiClient, QueryAssetsRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PublicApiClient::builder()
///         .api_key("my-session-token")
///         .version("v3")
///         .build()?;
///
///     let assets = client
///         .query_assets(Some(&QueryAssetsRequest {
///             page_size: 100,
///             ..Default::default()
///         }))
///         .await?;
///     println!("{}", assets["data"]);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PublicApiClient {
    config: Arc<ClientConfig>,
    url: String,
    conversion_url: String,
}

impl PublicApiClient {
    /// Create a new client builder.
    pub fn builder() -> PublicApiClientBuilder {
        PublicApiClientBuilder::new()
    }

    /// Create a client with the given key and all other settings defaulted.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// API version used in endpoint paths.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Base URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get<Q>(
        &self,
        path: &str,
        params: Option<&Q>,
    ) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.url, path);
        self.get_absolute(&url, params).await
    }

    /// Make a GET request against a full URL outside the base.
    pub(crate) async fn get_absolute<Q>(
        &self,
        url: &str,
        params: Option<&Q>,
    ) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        request::execute(self.config.transport.as_ref(), url, &self.config.request, params).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.url, path);
        let config = self.config.request.with_json_body(body)?;
        request::execute::<()>(self.config.transport.as_ref(), &url, &config, None).await
    }

    pub(crate) fn conversion_url(&self) -> &str {
        &self.conversion_url
    }
}

impl std::fmt::Debug for PublicApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicApiClient")
            .field("url", &self.url)
            .field("version", &self.config.version)
            .field("conversion_url", &self.conversion_url)
            .finish()
    }
}

/// Builder for [`PublicApiClient`].
pub struct PublicApiClientBuilder {
    options: ClientOptions,
    base_url: String,
    conversion_url: String,
}

impl PublicApiClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            options: ClientOptions::new(),
            base_url: PUBLIC_API_BASE_URL.to_string(),
            conversion_url: PRICE_CONVERSION_URL.to_string(),
        }
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.options.api_key(api_key);
        self
    }

    /// Set the credentials provider supplying the API key.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.options.credentials = Some(credentials);
        self
    }

    /// Set the API version used in paths (default `v1`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.options.version = version.into();
        self
    }

    /// Set the transport performing HTTP round trips.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.options.transport = Some(transport);
        self
    }

    /// Add a default header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.push((name.into(), value.into()));
        self
    }

    /// Set a custom user agent for the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = Some(user_agent.into());
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the full price-conversion URL.
    pub fn conversion_url(mut self, url: impl Into<String>) -> Self {
        self.conversion_url = url.into();
        self
    }

    /// Build the client.
    ///
    /// Fails with [`crate::CoinMarketCapError::MissingCredentials`] when no API key
    /// was provided or the key is empty.
    pub fn build(self) -> Result<PublicApiClient> {
        let config = ClientConfig::new(self.options, AuthScheme::Basic)?;

        Ok(PublicApiClient {
            config: Arc::new(config),
            url: self.base_url.trim_end_matches('/').to_string(),
            conversion_url: self.conversion_url,
        })
    }
}

impl Default for PublicApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
