//! Types for portfolio, watchlist and data API endpoints.
//!
//! Every request implements [`Default`] with the values the web app sends.
//! Override fields with struct update syntax:
//!
//! ```rust
//! use coinmarketcap_api_client::public::QueryAssetsRequest;
//!
//! let request = QueryAssetsRequest {
//!     page_size: 100,
//!     ..Default::default()
//! };
//! assert_eq!(request.portfolio_source_id, "default");
//! assert_eq!(request.crypto_unit, 2790);
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use crate::types::{TransactionType, Vote};

/// Portfolio targeted when none is given.
pub const DEFAULT_PORTFOLIO_SOURCE_ID: &str = "default";
/// Currency unit ID used for crypto and fiat amounts (USD).
pub const DEFAULT_CURRENCY_UNIT: u32 = 2790;
/// Fiat unit ID used by the statistics endpoint.
pub const DEFAULT_STATISTICS_FIAT_UNIT: u32 = 3;
/// Page size of paginated portfolio queries.
pub const DEFAULT_PAGE_SIZE: u32 = 16;
/// Watchlist type queried when none is given.
pub const DEFAULT_WATCHLIST_TYPE: &str = "ORDINARY";
/// Watchlist auxiliary fields flag.
pub const DEFAULT_WATCHLIST_AUX: u32 = 5;

/// Body for portfolio statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsRequest {
    /// Portfolio to query.
    pub portfolio_source_id: String,
    /// Unit for crypto values.
    pub crypto_unit: u32,
    /// Unit for fiat values.
    pub fiat_unit: u32,
}

impl Default for StatisticsRequest {
    fn default() -> Self {
        Self {
            portfolio_source_id: DEFAULT_PORTFOLIO_SOURCE_ID.to_string(),
            crypto_unit: DEFAULT_CURRENCY_UNIT,
            fiat_unit: DEFAULT_STATISTICS_FIAT_UNIT,
        }
    }
}

/// Body for the holdings list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAssetsRequest {
    /// Portfolio to query.
    pub portfolio_source_id: String,
    /// Unit for crypto values.
    pub crypto_unit: u32,
    /// 1-based page number.
    pub current_page: u32,
    /// Items per page.
    pub page_size: u32,
}

impl Default for QueryAssetsRequest {
    fn default() -> Self {
        Self {
            portfolio_source_id: DEFAULT_PORTFOLIO_SOURCE_ID.to_string(),
            crypto_unit: DEFAULT_CURRENCY_UNIT,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Body for the transactions of one asset.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsByCryptoRequest {
    /// Portfolio to query.
    pub portfolio_source_id: String,
    /// Unit for crypto values.
    pub crypto_unit: u32,
    /// Unit for fiat values.
    pub fiat_unit: u32,
    /// 1-based page number.
    pub current_page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Asset whose transactions are listed.
    pub cryptocurrency_id: Option<u64>,
}

impl Default for TransactionsByCryptoRequest {
    fn default() -> Self {
        Self {
            portfolio_source_id: DEFAULT_PORTFOLIO_SOURCE_ID.to_string(),
            crypto_unit: DEFAULT_CURRENCY_UNIT,
            fiat_unit: DEFAULT_CURRENCY_UNIT,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            cryptocurrency_id: None,
        }
    }
}

/// Body for the holding detail of one asset.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDetailRequest {
    /// Portfolio to query.
    pub portfolio_source_id: String,
    /// Unit for fiat values.
    pub fiat_unit: u32,
    /// Unit for crypto values.
    pub crypto_unit: u32,
    /// Asset to describe.
    pub cryptocurrency_id: Option<u64>,
}

impl CoinDetailRequest {
    /// Detail for one asset with default units.
    pub fn for_crypto(cryptocurrency_id: u64) -> Self {
        Self {
            cryptocurrency_id: Some(cryptocurrency_id),
            ..Default::default()
        }
    }
}

impl Default for CoinDetailRequest {
    fn default() -> Self {
        Self {
            portfolio_source_id: DEFAULT_PORTFOLIO_SOURCE_ID.to_string(),
            fiat_unit: DEFAULT_CURRENCY_UNIT,
            crypto_unit: DEFAULT_CURRENCY_UNIT,
            cryptocurrency_id: None,
        }
    }
}

/// Body for the watchlist query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistRequest {
    /// Watchlist type, e.g. `ORDINARY`.
    pub watch_list_type: String,
    /// Auxiliary fields flag.
    pub aux: u32,
}

impl Default for WatchlistRequest {
    fn default() -> Self {
        Self {
            watch_list_type: DEFAULT_WATCHLIST_TYPE.to_string(),
            aux: DEFAULT_WATCHLIST_AUX,
        }
    }
}

/// Query for gainers and losers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightRequest {
    /// Spotlight data set.
    pub data_type: u32,
    /// Entries per list.
    pub limit: u32,
    /// Window such as `1h`, `24h`, `7d`.
    pub time_frame: String,
    /// Restrict to the top N by rank; 0 for all.
    pub rank_range: u32,
}

impl Default for SpotlightRequest {
    fn default() -> Self {
        Self {
            data_type: 2,
            limit: 30,
            time_frame: "24h".to_string(),
            rank_range: 0,
        }
    }
}

/// Body for adding a transaction to the portfolio.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAssetRequest {
    /// Portfolio to modify.
    pub portfolio_source_id: String,
    /// Unit for crypto values.
    pub crypto_unit: u32,
    /// Unit for fiat values.
    pub fiat_unit: u32,
    /// Free-form note.
    pub note: String,
    /// Fee paid, as text.
    pub fee: String,
    /// Quantity of coins.
    pub amount: Option<Decimal>,
    /// Asset traded.
    pub cryptocurrency_id: Option<u64>,
    /// Price per coin in the fiat unit.
    pub price: Option<Decimal>,
    /// When the trade happened.
    #[serde(with = "time::serde::rfc3339::option")]
    pub transaction_time: Option<OffsetDateTime>,
    /// Buy or sell.
    pub transaction_type: Option<TransactionType>,
}

impl AddAssetRequest {
    /// A transaction happening now, with default units and portfolio.
    pub fn new(
        cryptocurrency_id: u64,
        transaction_type: TransactionType,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            amount: Some(amount),
            cryptocurrency_id: Some(cryptocurrency_id),
            price: Some(price),
            transaction_time: Some(OffsetDateTime::now_utc()),
            transaction_type: Some(transaction_type),
            ..Default::default()
        }
    }
}

impl Default for AddAssetRequest {
    fn default() -> Self {
        Self {
            portfolio_source_id: DEFAULT_PORTFOLIO_SOURCE_ID.to_string(),
            crypto_unit: DEFAULT_CURRENCY_UNIT,
            fiat_unit: DEFAULT_CURRENCY_UNIT,
            note: String::new(),
            fee: String::new(),
            amount: None,
            cryptocurrency_id: None,
            price: None,
            transaction_time: None,
            transaction_type: None,
        }
    }
}

/// Body for updating an existing transaction.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    /// Portfolio to modify.
    pub portfolio_source_id: String,
    /// Free-form note.
    pub note: String,
    /// Fee paid, as text.
    pub fee: String,
    /// Transaction being updated.
    pub id: Option<String>,
    /// Quantity of coins.
    pub amount: Option<Decimal>,
    /// Unit for crypto values.
    pub crypto_unit: Option<u32>,
    /// Price of the crypto unit.
    pub crypto_unit_price: Option<f64>,
    /// Asset traded.
    pub cryptocurrency_id: Option<u64>,
    /// Unit for fiat values.
    pub fiat_unit: Option<u32>,
    /// Unit the price was entered in.
    pub input_unit: Option<u32>,
    /// Price per coin in the fiat unit.
    pub price: Option<Decimal>,
    /// Price as entered.
    pub input_price: Option<f64>,
    /// When the trade happened.
    #[serde(with = "time::serde::rfc3339::option")]
    pub transaction_time: Option<OffsetDateTime>,
    /// Buy or sell.
    pub transaction_type: Option<TransactionType>,
}

impl UpdateAssetRequest {
    /// Update of the transaction with the given ID.
    pub fn for_transaction(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

impl Default for UpdateAssetRequest {
    fn default() -> Self {
        Self {
            portfolio_source_id: DEFAULT_PORTFOLIO_SOURCE_ID.to_string(),
            note: String::new(),
            fee: String::new(),
            id: None,
            amount: None,
            crypto_unit: None,
            crypto_unit_price: None,
            cryptocurrency_id: None,
            fiat_unit: None,
            input_unit: None,
            price: None,
            input_price: None,
            transaction_time: None,
            transaction_type: None,
        }
    }
}

/// Body for removing a transaction, or a whole asset when `id` is `None`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveAssetRequest {
    /// Portfolio to modify.
    pub portfolio_source_id: String,
    /// Single transaction to remove.
    pub id: Option<String>,
    /// Asset to remove.
    pub cryptocurrency_id: Option<u64>,
}

impl RemoveAssetRequest {
    /// Remove an asset and all its transactions.
    pub fn asset(cryptocurrency_id: u64) -> Self {
        Self {
            cryptocurrency_id: Some(cryptocurrency_id),
            ..Default::default()
        }
    }

    /// Remove one transaction of an asset.
    pub fn transaction(cryptocurrency_id: u64, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            cryptocurrency_id: Some(cryptocurrency_id),
            ..Default::default()
        }
    }
}

impl Default for RemoveAssetRequest {
    fn default() -> Self {
        Self {
            portfolio_source_id: DEFAULT_PORTFOLIO_SOURCE_ID.to_string(),
            id: None,
            cryptocurrency_id: None,
        }
    }
}

/// A sentiment vote on a cryptocurrency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteRequest {
    /// Asset voted on.
    pub crypto_id: u64,
    /// Good or bad.
    pub vote: Vote,
}

/// Wire form of [`VoteRequest`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VoteBody {
    pub(crate) crypto_id: u64,
    pub(crate) voted: Vote,
}

impl From<&VoteRequest> for VoteBody {
    fn from(request: &VoteRequest) -> Self {
        Self {
            crypto_id: request.crypto_id,
            voted: request.vote,
        }
    }
}

/// Query for the votes of one cryptocurrency.
#[derive(Debug, Serialize)]
pub(crate) struct VotesQuery {
    pub(crate) id: u64,
}
