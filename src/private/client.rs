//! CoinMarketCap Pro API client implementation.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::auth::CredentialsProvider;
use crate::config::{AuthScheme, ClientConfig, ClientOptions};
use crate::Result;
use crate::private::endpoints::PRO_API_BASE_URL;
use crate::request;
use crate::transport::Transport;

/// The CoinMarketCap Pro ("private") API client.
///
/// Every call is a single authenticated `GET` against
/// `https://pro-api.coinmarketcap.com/{version}`; the parsed JSON envelope is
/// returned untouched.
///
/// # Example
///
/// ```rust,no_run
/// use coinmarketcap_api_client::private::{PrivateApiClient, QuotesRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PrivateApiClient::builder().api_key("my-api-key").build()?;
///
///     let quotes = client
///         .get_quotes(&QuotesRequest::by_symbol(vec!["BTC", "ETH"]).convert("EUR"))
///         .await?;
///     println!("{}", quotes["data"]["BTC"]["quote"]["EUR"]["price"]);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PrivateApiClient {
    config: Arc<ClientConfig>,
    url: String,
}

impl PrivateApiClient {
    /// Create a new client builder.
    pub fn builder() -> PrivateApiClientBuilder {
        PrivateApiClientBuilder::new()
    }

    /// Create a client with the given key and all other settings defaulted.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// API version this client targets.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Versioned base URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn get<Q>(
        &self,
        endpoint: &str,
        params: Option<&Q>,
    ) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.url, endpoint);
        request::execute(self.config.transport.as_ref(), &url, &self.config.request, params).await
    }
}

impl std::fmt::Debug for PrivateApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateApiClient")
            .field("url", &self.url)
            .field("version", &self.config.version)
            .finish()
    }
}

/// Builder for [`PrivateApiClient`].
pub struct PrivateApiClientBuilder {
    options: ClientOptions,
    base_url: String,
}

impl PrivateApiClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            options: ClientOptions::new(),
            base_url: PRO_API_BASE_URL.to_string(),
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

    /// Set the API version (default `v1`).
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

    /// Build the client.
    ///
    /// Fails with [`crate::CoinMarketCapError::MissingCredentials`] when no API key
    /// was provided or the key is empty.
    pub fn build(self) -> Result<PrivateApiClient> {
        let config = ClientConfig::new(self.options, AuthScheme::ProApiKey)?;
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), config.version);

        Ok(PrivateApiClient {
            config: Arc::new(config),
            url,
        })
    }
}

impl Default for PrivateApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
