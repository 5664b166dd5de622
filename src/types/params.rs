//! Parameter validation shared by both clients.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use crate::error::CoinMarketCapError;
use crate::types::ListParam;

/// Identifier pair produced by [`sanitize_id_and_symbol`].
///
/// Exactly one of the two fields is set.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdAndSymbol {
    /// Comma-joined CoinMarketCap IDs.
    pub id: Option<String>,
    /// Comma-joined ticker symbols.
    pub symbol: Option<String>,
}

/// Validate a mutually exclusive `id`/`symbol` pair and flatten lists.
///
/// Fails with [`CoinMarketCapError::InvalidArgument`] when both are given or
/// when neither is. Empty lists count as absent.
///
/// # Example
///
/// ```rust
/// use coinmarketcap_api_client::types::{ListParam, sanitize_id_and_symbol};
///
/// let symbols = ListParam::from(vec!["BTC", "ETH"]);
/// let sanitized = sanitize_id_and_symbol(None, Some(&symbols)).unwrap();
/// assert_eq!(sanitized.symbol.as_deref(), Some("BTC,ETH"));
/// assert!(sanitized.id.is_none());
///
/// let ids = ListParam::from(1);
/// assert!(sanitize_id_and_symbol(Some(&ids), Some(&symbols)).is_err());
/// assert!(sanitize_id_and_symbol(None, None).is_err());
/// ```
pub fn sanitize_id_and_symbol(
    id: Option<&ListParam>,
    symbol: Option<&ListParam>,
) -> Result<IdAndSymbol, CoinMarketCapError> {
    let id = id.filter(|list| !list.is_empty());
    let symbol = symbol.filter(|list| !list.is_empty());

    match (id, symbol) {
        (Some(_), Some(_)) => Err(CoinMarketCapError::invalid_argument(
            "ID and symbol cannot be passed in at the same time.",
        )),
        (None, None) => Err(CoinMarketCapError::invalid_argument(
            "Either ID or symbol is required to be passed in.",
        )),
        (id, symbol) => Ok(IdAndSymbol {
            id: id.map(ListParam::joined),
            symbol: symbol.map(ListParam::joined),
        }),
    }
}

/// Request parameters for a price conversion.
///
/// The base asset is named by `id` or `symbol` and the target by
/// `convert_id` or `convert`. When both forms are set the ID wins.
///
/// # Example
///
/// ```rust
/// use coinmarketcap_api_client::types::PriceConversionRequest;
/// use rust_decimal::Decimal;
///
/// let request = PriceConversionRequest::new(Decimal::ONE)
///     .symbol("ETH")
///     .convert("EUR");
/// assert!(request.to_query().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceConversionRequest {
    /// Amount of the base asset.
    pub amount: Decimal,
    /// CoinMarketCap ID of the base asset.
    pub id: Option<String>,
    /// Symbol of the base asset.
    pub symbol: Option<String>,
    /// Historical point in time for the conversion.
    pub time: Option<OffsetDateTime>,
    /// CoinMarketCap IDs to convert into.
    pub convert_id: Option<ListParam>,
    /// Symbols to convert into.
    pub convert: Option<ListParam>,
}

impl PriceConversionRequest {
    /// Start a conversion of `amount` units.
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            ..Default::default()
        }
    }

    /// Name the base asset by ID.
    pub fn id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Name the base asset by symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Convert at a historical time.
    pub fn time(mut self, time: OffsetDateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Target asset(s) by ID.
    pub fn convert_id(mut self, convert_id: impl Into<ListParam>) -> Self {
        self.convert_id = Some(convert_id.into());
        self
    }

    /// Target asset(s) by symbol.
    pub fn convert(mut self, convert: impl Into<ListParam>) -> Self {
        self.convert = Some(convert.into());
        self
    }

    /// Validate the request and build its query mapping.
    pub fn to_query(&self) -> Result<PriceConversionQuery, CoinMarketCapError> {
        let id = self.id.as_deref().filter(|id| !id.is_empty());
        let symbol = self.symbol.as_deref().filter(|symbol| !symbol.is_empty());
        if id.is_none() && symbol.is_none() {
            return Err(CoinMarketCapError::invalid_argument(
                "You need to provide at least id or symbol of base coin.",
            ));
        }

        let convert_id = self.convert_id.as_ref().filter(|list| !list.is_empty());
        let convert = self.convert.as_ref().filter(|list| !list.is_empty());
        if convert_id.is_none() && convert.is_none() {
            return Err(CoinMarketCapError::invalid_argument(
                "You need to provide at least id or symbol of convert coin.",
            ));
        }

        Ok(PriceConversionQuery {
            amount: self.amount,
            time: self.time,
            id: id.map(str::to_string),
            symbol: if id.is_some() {
                None
            } else {
                symbol.map(str::to_string)
            },
            convert_id: convert_id.map(ListParam::joined),
            convert: if convert_id.is_some() {
                None
            } else {
                convert.map(ListParam::joined)
            },
        })
    }
}

/// Validated query mapping for the price-conversion endpoints.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceConversionQuery {
    amount: Decimal,
    #[serde(with = "time::serde::rfc3339::option")]
    time: Option<OffsetDateTime>,
    id: Option<String>,
    symbol: Option<String>,
    convert_id: Option<String>,
    convert: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_sanitize_rejects_both() {
        let id = ListParam::from(1);
        let symbol = ListParam::from("BTC");
        let err = sanitize_id_and_symbol(Some(&id), Some(&symbol)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_sanitize_rejects_neither() {
        let err = sanitize_id_and_symbol(None, None).unwrap_err();
        assert!(err.is_invalid_argument());

        let empty = ListParam::from("");
        let err = sanitize_id_and_symbol(Some(&empty), None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_sanitize_joins_ids() {
        let ids = ListParam::from(vec![1, 1027, 825]);
        let sanitized = sanitize_id_and_symbol(Some(&ids), None).unwrap();
        assert_eq!(sanitized.id.as_deref(), Some("1,1027,825"));
        assert!(sanitized.symbol.is_none());
        assert_eq!(serde_urlencoded::to_string(&sanitized).unwrap(), "id=1%2C1027%2C825");
    }

    #[test]
    fn test_sanitize_scalar_unchanged() {
        let symbol = ListParam::from("BTC,ETH");
        let sanitized = sanitize_id_and_symbol(None, Some(&symbol)).unwrap();
        assert_eq!(sanitized.symbol.as_deref(), Some("BTC,ETH"));
    }

    #[test]
    fn test_conversion_requires_base() {
        let request = PriceConversionRequest::new(Decimal::ONE).convert("EUR");
        assert!(request.to_query().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_conversion_requires_target() {
        let request = PriceConversionRequest::new(Decimal::ONE).symbol("ETH");
        assert!(request.to_query().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_conversion_prefers_ids() {
        let request = PriceConversionRequest::new(Decimal::new(25, 1))
            .id(1027)
            .symbol("ETH")
            .convert_id(2790)
            .convert("EUR");
        let query = serde_urlencoded::to_string(request.to_query().unwrap()).unwrap();
        assert_eq!(query, "amount=2.5&id=1027&convert_id=2790");
    }

    #[test]
    fn test_conversion_with_time() {
        let request = PriceConversionRequest::new(Decimal::ONE)
            .symbol("BTC")
            .convert(vec!["USD", "EUR"])
            .time(datetime!(2024-01-02 03:04:05 UTC));
        let query = serde_urlencoded::to_string(request.to_query().unwrap()).unwrap();
        assert_eq!(
            query,
            "amount=1&time=2024-01-02T03%3A04%3A05Z&symbol=BTC&convert=USD%2CEUR"
        );
    }
}
