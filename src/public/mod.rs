//! CoinMarketCap portfolio/web ("public") API.
//!
//! Portfolio and watchlist endpoints take a JSON body merged over per-endpoint
//! defaults; data endpoints take query strings. No cross-field validation is
//! done here except for price conversion.

mod client;
pub mod endpoints;
mod types;

pub use client::{PublicApiClient, PublicApiClientBuilder};
pub use types::*;

use serde_json::Value;

use crate::Result;
use crate::types::PriceConversionRequest;

impl PublicApiClient {
    /// Get portfolio-wide statistics.
    pub async fn query_statistics(
        &self,
        request: Option<&StatisticsRequest>,
    ) -> Result<Value> {
        let path =
            endpoints::portfolio_path(self.version(), endpoints::portfolio::QUERY_STATISTICS);
        match request {
            Some(req) => self.post(&path, req).await,
            None => self.post(&path, &StatisticsRequest::default()).await,
        }
    }

    /// Get the list of holdings in the portfolio.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinmarketcap_api_client::public::PublicApiClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PublicApiClient::new("my-session-token")?;
    ///     let assets = client.query_assets(None).await?;
    ///     for holding in assets["data"][0]["list"].as_array().into_iter().flatten() {
    ///         println!("{} {}", holding["symbol"], holding["amount"]);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn query_assets(
        &self,
        request: Option<&QueryAssetsRequest>,
    ) -> Result<Value> {
        let path = endpoints::portfolio_path(self.version(), endpoints::portfolio::QUERY);
        match request {
            Some(req) => self.post(&path, req).await,
            None => self.post(&path, &QueryAssetsRequest::default()).await,
        }
    }

    /// Get the transactions recorded for one asset.
    pub async fn query_transactions_by_crypto(
        &self,
        request: Option<&TransactionsByCryptoRequest>,
    ) -> Result<Value> {
        let path = endpoints::portfolio_path(
            self.version(),
            endpoints::portfolio::QUERY_TRANSACTIONS_BY_CRYPTO,
        );
        match request {
            Some(req) => self.post(&path, req).await,
            None => self.post(&path, &TransactionsByCryptoRequest::default()).await,
        }
    }

    /// Get the current holding detail of one asset.
    pub async fn portfolio_coin_detail(
        &self,
        request: Option<&CoinDetailRequest>,
    ) -> Result<Value> {
        let path = endpoints::portfolio_path(self.version(), endpoints::portfolio::DETAIL);
        match request {
            Some(req) => self.post(&path, req).await,
            None => self.post(&path, &CoinDetailRequest::default()).await,
        }
    }

    /// Get the watched cryptocurrencies.
    pub async fn query_watchlist(
        &self,
        request: Option<&WatchlistRequest>,
    ) -> Result<Value> {
        let path = endpoints::watchlist_path(self.version());
        match request {
            Some(req) => self.post(&path, req).await,
            None => self.post(&path, &WatchlistRequest::default()).await,
        }
    }

    /// Get the top gainers and losers.
    pub async fn query_spotlight(
        &self,
        request: Option<&SpotlightRequest>,
    ) -> Result<Value> {
        let path = endpoints::data_path(self.version(), endpoints::data::SPOTLIGHT);
        match request {
            Some(req) => self.get(&path, Some(req)).await,
            None => self.get(&path, Some(&SpotlightRequest::default())).await,
        }
    }

    /// Add a transaction to the portfolio.
    pub async fn add_asset(&self, request: &AddAssetRequest) -> Result<Value> {
        let path = endpoints::portfolio_path(self.version(), endpoints::portfolio::ADD);
        self.post(&path, request).await
    }

    /// Update a transaction in the portfolio.
    pub async fn update_asset(
        &self,
        request: &UpdateAssetRequest,
    ) -> Result<Value> {
        let path = endpoints::portfolio_path(self.version(), endpoints::portfolio::UPDATE);
        self.post(&path, request).await
    }

    /// Remove a single transaction, or a whole asset when no transaction ID is set.
    pub async fn remove_asset(
        &self,
        request: &RemoveAssetRequest,
    ) -> Result<Value> {
        let path = endpoints::portfolio_path(self.version(), endpoints::portfolio::DELETE);
        self.post(&path, request).await
    }

    /// Get the sentiment votes for a cryptocurrency.
    pub async fn get_votes(&self, crypto_id: u64) -> Result<Value> {
        let path = endpoints::data_path(self.version(), endpoints::data::VOTE);
        self.get(&path, Some(&VotesQuery { id: crypto_id })).await
    }

    /// Vote on a cryptocurrency.
    pub async fn vote(&self, request: &VoteRequest) -> Result<Value> {
        let path = endpoints::data_path(self.version(), endpoints::data::VOTE);
        self.post(&path, &VoteBody::from(request)).await
    }

    /// Convert an amount of one asset into one or more others at the live price.
    ///
    /// Uses the externally versioned conversion URL, not the client version.
    pub async fn convert_currency(
        &self,
        request: &PriceConversionRequest,
    ) -> Result<Value> {
        let query = request.to_query()?;
        self.get_absolute(self.conversion_url(), Some(&query)).await
    }
}
