//! CoinMarketCap Pro ("private") API.
//!
//! Authenticated with the `X-CMC_PRO_API_KEY` header. Every endpoint is a
//! `GET` whose query mapping is built from a typed request.

mod client;
pub mod endpoints;
mod types;

pub use client::{PrivateApiClient, PrivateApiClientBuilder};
pub use types::*;

use serde_json::Value;

use crate::Result;
use crate::types::{ListParam, PriceConversionRequest, sanitize_id_and_symbol};

impl PrivateApiClient {
    /// Get a paginated list of all cryptocurrencies by CoinMarketCap ID.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinmarketcap_api_client::private::{IdMapRequest, PrivateApiClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PrivateApiClient::new("my-api-key")?;
    ///     let request = IdMapRequest::for_symbols(vec!["BTC", "ETH"]);
    ///     let map = client.get_id_map(Some(&request)).await?;
    ///     println!("{}", map["data"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_id_map(
        &self,
        request: Option<&IdMapRequest>,
    ) -> Result<Value> {
        self.get(endpoints::CRYPTOCURRENCY_MAP, request).await
    }

    /// Get static metadata for one or more cryptocurrencies.
    ///
    /// Either `id` or `symbol` is required; passing both is rejected.
    pub async fn get_metadata(
        &self,
        request: &MetadataRequest,
    ) -> Result<Value> {
        let query = sanitize_id_and_symbol(request.id.as_ref(), request.symbol.as_ref())?;
        self.get(endpoints::CRYPTOCURRENCY_INFO, Some(&query)).await
    }

    /// Get the latest listings of all tickers.
    ///
    /// A `limit` of 0 requests the maximum page size.
    pub async fn get_tickers(
        &self,
        request: Option<&TickersRequest>,
    ) -> Result<Value> {
        let query = match request {
            Some(req) => Some(req.to_query()?),
            None => None,
        };
        self.get(endpoints::LISTINGS_LATEST, query.as_ref()).await
    }

    /// Get the latest market quote for one or more cryptocurrencies.
    pub async fn get_quotes(&self, request: &QuotesRequest) -> Result<Value> {
        let query = request.to_query()?;
        self.get(endpoints::QUOTES_LATEST, Some(&query)).await
    }

    /// Get the latest global market metrics.
    ///
    /// Currency codes are upper-cased; without `convert` no query string is sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinmarketcap_api_client::private::PrivateApiClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PrivateApiClient::new("my-api-key")?;
    ///     let global = client.get_global(Some("gbp".into())).await?;
    ///     println!("{}", global["data"]["quote"]["GBP"]["total_market_cap"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_global(
        &self,
        convert: Option<ListParam>,
    ) -> Result<Value> {
        let query = GlobalQuery::new(convert.as_ref());
        self.get(endpoints::GLOBAL_METRICS_LATEST, Some(&query)).await
    }

    /// Convert an amount of one asset into one or more others.
    pub async fn convert_currency(
        &self,
        request: &PriceConversionRequest,
    ) -> Result<Value> {
        let query = request.to_query()?;
        self.get(endpoints::PRICE_CONVERSION, Some(&query)).await
    }
}
