//! Types for Pro API endpoints.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::error::CoinMarketCapError;
use crate::types::{CryptocurrencyType, ListParam, ListingStatus, SortDir, sanitize_id_and_symbol};

/// Largest page the listings endpoint serves; requested with `limit = 0`.
pub const MAX_LISTINGS_LIMIT: u32 = 5000;

/// Request parameters for the CoinMarketCap ID map.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct IdMapRequest {
    /// Active, inactive or untracked coins.
    pub listing_status: Option<ListingStatus>,
    /// Offset (1-based) of the first result.
    pub start: Option<u32>,
    /// Number of results.
    pub limit: Option<u32>,
    /// Only return these symbols; other filters are ignored by the server.
    pub symbol: Option<ListParam>,
    /// `id` or `cmc_rank`.
    pub sort: Option<String>,
}

impl IdMapRequest {
    /// Create a request for specific symbols.
    pub fn for_symbols(symbols: impl Into<ListParam>) -> Self {
        Self {
            symbol: Some(symbols.into()),
            ..Default::default()
        }
    }
}

/// Request parameters for cryptocurrency metadata.
///
/// Exactly one of `id` or `symbol` must be set.
#[derive(Debug, Clone, Default)]
pub struct MetadataRequest {
    /// CoinMarketCap IDs.
    pub id: Option<ListParam>,
    /// Ticker symbols.
    pub symbol: Option<ListParam>,
}

impl MetadataRequest {
    /// Request metadata by ID.
    pub fn by_id(id: impl Into<ListParam>) -> Self {
        Self {
            id: Some(id.into()),
            symbol: None,
        }
    }

    /// Request metadata by symbol.
    pub fn by_symbol(symbol: impl Into<ListParam>) -> Self {
        Self {
            id: None,
            symbol: Some(symbol.into()),
        }
    }
}

/// Request parameters for the latest listings.
///
/// `limit: Some(0)` asks for the maximum page ([`MAX_LISTINGS_LIMIT`]) and
/// cannot be combined with a non-zero `start`.
#[derive(Debug, Clone, Default)]
pub struct TickersRequest {
    /// Offset (1-based) of the first result.
    pub start: Option<u32>,
    /// Number of results, 0 for the maximum.
    pub limit: Option<u32>,
    /// Currencies to quote in.
    pub convert: Option<ListParam>,
    /// Sort field, e.g. `market_cap`, `name`, `volume_24h`.
    pub sort: Option<String>,
    /// Sort direction.
    pub sort_dir: Option<SortDir>,
    /// Coins, tokens or both.
    pub cryptocurrency_type: Option<CryptocurrencyType>,
}

impl TickersRequest {
    /// Validate the pagination rules and build the query mapping.
    pub fn to_query(&self) -> Result<TickersQuery, CoinMarketCapError> {
        let mut limit = self.limit;
        if limit == Some(0) {
            if self.start.is_some_and(|start| start != 0) {
                return Err(CoinMarketCapError::invalid_argument(
                    "Start and limit = 0 cannot be passed in at the same time.",
                ));
            }
            limit = Some(MAX_LISTINGS_LIMIT);
        }

        Ok(TickersQuery {
            start: self.start,
            limit,
            convert: self.convert.as_ref().map(ListParam::joined),
            sort: self.sort.clone(),
            sort_dir: self.sort_dir,
            cryptocurrency_type: self.cryptocurrency_type,
        })
    }
}

/// Validated query mapping for the listings endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickersQuery {
    start: Option<u32>,
    limit: Option<u32>,
    convert: Option<String>,
    sort: Option<String>,
    sort_dir: Option<SortDir>,
    cryptocurrency_type: Option<CryptocurrencyType>,
}

/// Request parameters for the latest quotes.
///
/// Exactly one of `id` or `symbol` must be set.
#[derive(Debug, Clone, Default)]
pub struct QuotesRequest {
    /// CoinMarketCap IDs.
    pub id: Option<ListParam>,
    /// Ticker symbols.
    pub symbol: Option<ListParam>,
    /// Currencies to quote in.
    pub convert: Option<ListParam>,
}

impl QuotesRequest {
    /// Request quotes by ID.
    pub fn by_id(id: impl Into<ListParam>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Request quotes by symbol.
    pub fn by_symbol(symbol: impl Into<ListParam>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Default::default()
        }
    }

    /// Quote in these currencies.
    pub fn convert(mut self, convert: impl Into<ListParam>) -> Self {
        self.convert = Some(convert.into());
        self
    }

    /// Validate the identifiers and build the query mapping.
    pub fn to_query(&self) -> Result<QuotesQuery, CoinMarketCapError> {
        let ids = sanitize_id_and_symbol(self.id.as_ref(), self.symbol.as_ref())?;
        Ok(QuotesQuery {
            id: ids.id,
            symbol: ids.symbol,
            convert: self.convert.as_ref().map(ListParam::joined),
        })
    }
}

/// Validated query mapping for the quotes endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotesQuery {
    id: Option<String>,
    symbol: Option<String>,
    convert: Option<String>,
}

/// Query mapping for global metrics.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct GlobalQuery {
    pub(crate) convert: Option<String>,
}

impl GlobalQuery {
    /// Currency codes are upper-cased before joining.
    pub(crate) fn new(convert: Option<&ListParam>) -> Self {
        Self {
            convert: convert
                .filter(|list| !list.is_empty())
                .map(|list| list.to_uppercase().joined()),
        }
    }
}
