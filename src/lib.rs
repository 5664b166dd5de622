//! # CoinMarketCap Client
//!
//! An async Rust client library for the CoinMarketCap Pro API and the
//! portfolio/web API behind the CoinMarketCap site.
//!
//! ## Features
//!
//! - Pro API: ID map, metadata, listings, quotes, global metrics, price conversion
//! - Portfolio API: holdings, transactions, watchlist, spotlight, votes
//! - Pluggable [`Transport`] for the HTTP round trip
//! - Parameter validation before any network access
//! - Financial precision with `rust_decimal`
//!
//! Responses are returned as the parsed JSON envelope (`data` and `status`).
//! Use [`types::ApiResponse`] to read it into typed form.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinmarketcap_api_client::private::{PrivateApiClient, QuotesRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PrivateApiClient::new("my-api-key")?;
//!     let quotes = client.get_quotes(&QuotesRequest::by_symbol(vec!["BTC", "ETH"])).await?;
//!     println!("{}", quotes["data"]["BTC"]["quote"]["USD"]["price"]);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod private;
pub mod public;
pub mod request;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export commonly used types at crate root
pub use error::CoinMarketCapError;
pub use private::PrivateApiClient;
pub use public::PublicApiClient;
pub use transport::{HttpRequest, HttpResponse, Transport};
pub use types::ListParam;

/// Result type alias using CoinMarketCapError
pub type Result<T> = std::result::Result<T, CoinMarketCapError>;
