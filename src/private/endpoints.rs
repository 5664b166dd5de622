//! Pro API endpoint constants.

/// Base URL for the CoinMarketCap Pro API (the version segment is appended).
pub const PRO_API_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Get the CoinMarketCap ID map.
pub const CRYPTOCURRENCY_MAP: &str = "/cryptocurrency/map";
/// Get static metadata.
pub const CRYPTOCURRENCY_INFO: &str = "/cryptocurrency/info";
/// Get the latest listings.
pub const LISTINGS_LATEST: &str = "/cryptocurrency/listings/latest";
/// Get the latest quotes.
pub const QUOTES_LATEST: &str = "/cryptocurrency/quotes/latest";
/// Get the latest global metrics.
pub const GLOBAL_METRICS_LATEST: &str = "/global-metrics/quotes/latest";
/// Convert an amount between assets.
pub const PRICE_CONVERSION: &str = "/tools/price-conversion";
