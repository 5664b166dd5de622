//! Common domain types for CoinMarketCap requests.

use serde::{Deserialize, Serialize, Serializer};

/// Side of a portfolio transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Coins bought
    Buy,
    /// Coins sold
    Sell,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "buy"),
            TransactionType::Sell => write!(f, "sell"),
        }
    }
}

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

/// Which kind of cryptocurrency a listing includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptocurrencyType {
    #[default]
    All,
    Coins,
    Tokens,
}

/// Listing status filter for the ID map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Currently listed
    #[default]
    Active,
    /// Delisted
    Inactive,
    /// Listed but not tracked
    Untracked,
}

/// Sentiment vote on a cryptocurrency.
///
/// Sent on the wire as `1` (good) or `2` (bad).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vote {
    Good,
    Bad,
}

impl Vote {
    /// Numeric code used by the vote endpoint.
    pub fn code(self) -> u8 {
        match self {
            Vote::Good => 1,
            Vote::Bad => 2,
        }
    }
}

impl Serialize for Vote {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}
