//! Common types used across the CoinMarketCap client library.

pub mod common;
pub mod envelope;
pub mod list;
pub mod params;
pub mod serde_helpers;

pub use common::*;
pub use envelope::{ApiResponse, ResponseStatus};
pub use list::ListParam;
pub use params::{IdAndSymbol, PriceConversionQuery, PriceConversionRequest, sanitize_id_and_symbol};
