//! Comma-joined list parameters.

use std::fmt;

use serde::{Serialize, Serializer};

/// A query parameter that accepts one value or many.
///
/// CoinMarketCap takes lists such as `symbol=BTC,ETH` or `convert=USD,EUR`
/// as a single comma-separated string. A `ListParam` keeps the caller's items
/// in order and serializes them joined with `,`. A scalar that already
/// contains commas passes through unchanged.
///
/// # Example
///
/// ```rust
/// use coinmarketcap_api_client::types::ListParam;
///
/// assert_eq!(ListParam::from(vec!["BTC", "ETH"]).joined(), "BTC,ETH");
/// assert_eq!(ListParam::from("BTC,ETH").joined(), "BTC,ETH");
/// assert_eq!(ListParam::from([1, 1027]).joined(), "1,1027");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListParam(Vec<String>);

impl ListParam {
    /// Build a list from any iterator of displayable items.
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self(items.into_iter().map(|item| item.to_string()).collect())
    }

    /// The items in the order they were given.
    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// The wire form: items joined with `,`.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }

    /// A list carrying no usable value (no items, or only empty strings).
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|item| item.is_empty())
    }

    /// Copy of the list with every item upper-cased.
    pub fn to_uppercase(&self) -> Self {
        Self(self.0.iter().map(|item| item.to_uppercase()).collect())
    }
}

impl fmt::Display for ListParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl Serialize for ListParam {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.joined())
    }
}

impl From<&str> for ListParam {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for ListParam {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl<T: ToString> From<Vec<T>> for ListParam {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: ToString> From<&[T]> for ListParam {
    fn from(values: &[T]) -> Self {
        Self(values.iter().map(|value| value.to_string()).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for ListParam {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

macro_rules! list_param_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for ListParam {
                fn from(value: $int) -> Self {
                    Self(vec![value.to_string()])
                }
            }
        )*
    };
}

list_param_from_integer!(i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_in_order() {
        let list = ListParam::from(vec!["ETH", "BTC", "XRP"]);
        assert_eq!(list.joined(), "ETH,BTC,XRP");
        assert_eq!(list.to_string(), "ETH,BTC,XRP");
    }

    #[test]
    fn test_scalar_passes_through() {
        assert_eq!(ListParam::from("BTC,ETH").joined(), "BTC,ETH");
        assert_eq!(ListParam::from(1).joined(), "1");
    }

    #[test]
    fn test_empty() {
        assert!(ListParam::from("").is_empty());
        assert!(ListParam::new(Vec::<String>::new()).is_empty());
        assert!(!ListParam::from("BTC").is_empty());
    }

    #[test]
    fn test_uppercase() {
        let list = ListParam::from(["gbp", "eur"]).to_uppercase();
        assert_eq!(list.items(), ["GBP", "EUR"]);
    }

    #[test]
    fn test_serializes_as_joined_string() {
        #[derive(Serialize)]
        struct Query {
            symbol: ListParam,
        }

        let query = Query {
            symbol: ListParam::from(vec!["BTC", "ETH"]),
        };
        assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "symbol=BTC%2CETH");
        assert_eq!(serde_json::to_string(&query).unwrap(), r#"{"symbol":"BTC,ETH"}"#);
    }
}
