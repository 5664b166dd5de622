//! Portfolio and data API endpoint paths.
//!
//! The version segment sits in the middle of these paths, so they are built
//! per client from the configured version.

/// Base URL for the portfolio, watchlist and data APIs.
pub const PUBLIC_API_BASE_URL: &str = "https://api.coinmarketcap.com";

/// Externally versioned price-conversion endpoint.
pub const PRICE_CONVERSION_URL: &str =
    "https://web-api.coinmarketcap.com/v1/tools/price-conversion";

/// Portfolio actions under `/asset/{version}/portfolio/`.
pub mod portfolio {
    /// Portfolio-wide statistics.
    pub const QUERY_STATISTICS: &str = "queryStatistics";
    /// Holdings list.
    pub const QUERY: &str = "query";
    /// Transactions of one asset.
    pub const QUERY_TRANSACTIONS_BY_CRYPTO: &str = "queryTransactionsByCrypto";
    /// Holding detail of one asset.
    pub const DETAIL: &str = "detail";
    /// Add a transaction.
    pub const ADD: &str = "add";
    /// Update a transaction.
    pub const UPDATE: &str = "update";
    /// Remove a transaction or a whole asset.
    pub const DELETE: &str = "delete";
}

/// Cryptocurrency data actions under `/data-api/{version}/cryptocurrency/`.
pub mod data {
    /// Gainers and losers.
    pub const SPOTLIGHT: &str = "spotlight";
    /// Sentiment votes.
    pub const VOTE: &str = "vote";
}

/// Path of a portfolio action.
pub fn portfolio_path(version: &str, action: &str) -> String {
    format!("/asset/{}/portfolio/{}", version, action)
}

/// Path of the watchlist query.
pub fn watchlist_path(version: &str) -> String {
    format!("/watchlist/{}/watchlist/query", version)
}

/// Path of a cryptocurrency data action.
pub fn data_path(version: &str, action: &str) -> String {
    format!("/data-api/{}/cryptocurrency/{}", version, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(portfolio_path("v1", portfolio::QUERY), "/asset/v1/portfolio/query");
        assert_eq!(
            portfolio_path("v1", portfolio::QUERY_TRANSACTIONS_BY_CRYPTO),
            "/asset/v1/portfolio/queryTransactionsByCrypto"
        );
        assert_eq!(watchlist_path("v3"), "/watchlist/v3/watchlist/query");
        assert_eq!(data_path("v3", data::VOTE), "/data-api/v3/cryptocurrency/vote");
    }
}
