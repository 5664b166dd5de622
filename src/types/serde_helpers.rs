//! Custom serde helpers for CoinMarketCap's loosely typed responses.
//!
//! The Pro API reports status counters as JSON numbers while the portfolio
//! and data APIs send the same fields as strings. These helpers accept both.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Deserialize an optional integer sent either as a number or as a string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinmarketcap_api_client::types::serde_helpers::number_or_string;
///
/// #[derive(Deserialize, Debug)]
/// struct Status {
///     #[serde(deserialize_with = "number_or_string::deserialize", default)]
///     error_code: Option<i64>,
/// }
///
/// let pro: Status = serde_json::from_str(r#"{"error_code":0}"#).unwrap();
/// let web: Status = serde_json::from_str(r#"{"error_code":"0"}"#).unwrap();
/// assert_eq!(pro.error_code, Some(0));
/// assert_eq!(web.error_code, Some(0));
/// ```
pub mod number_or_string {
    use super::*;

    /// Deserialize a value that may be an integer, a numeric string, or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumberOrStringVisitor;

        impl<'de> de::Visitor<'de> for NumberOrStringVisitor {
            type Value = Option<i64>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a numeric string")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(v).map(Some).map_err(de::Error::custom)
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v.fract() != 0.0 || v < i64::MIN as f64 || v >= i64::MAX as f64 {
                    return Err(de::Error::custom(format!("expected an integer, got {}", v)));
                }
                Ok(Some(v as i64))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse().map(Some).map_err(de::Error::custom)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(&v)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }
        }

        deserializer.deserialize_any(NumberOrStringVisitor)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// CoinMarketCap sends `"error_message": ""` as often as `null`.
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
