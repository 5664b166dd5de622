//! The `{ data, status }` envelope wrapping every CoinMarketCap response.
//!
//! The clients return responses untouched as [`serde_json::Value`]; these
//! types are for callers who want to inspect the envelope with types.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CoinMarketCapError;
use crate::types::serde_helpers::{empty_string_as_none, number_or_string};

/// Typed view of a response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T = Value> {
    /// Endpoint payload; absent on most error responses.
    #[serde(default)]
    pub data: Option<T>,
    /// Request status block.
    pub status: ResponseStatus,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Interpret a parsed response as an envelope.
    pub fn from_value(value: Value) -> Result<Self, CoinMarketCapError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// The `status` object of a response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseStatus {
    /// Server timestamp (ISO 8601).
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Zero on success; numeric or string depending on the API.
    #[serde(deserialize_with = "number_or_string::deserialize", default)]
    pub error_code: Option<i64>,
    /// Error description, if any.
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub error_message: Option<String>,
    /// Server-side processing time in milliseconds.
    #[serde(deserialize_with = "number_or_string::deserialize", default)]
    pub elapsed: Option<i64>,
    /// API credits consumed by the call.
    #[serde(deserialize_with = "number_or_string::deserialize", default)]
    pub credit_count: Option<i64>,
    /// Deprecation or plan notices.
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub notice: Option<String>,
}

impl ResponseStatus {
    /// Whether the server reported a non-zero error code.
    pub fn is_error(&self) -> bool {
        self.error_code.is_some_and(|code| code != 0)
    }
}

/// Known CoinMarketCap error codes.
pub mod error_codes {
    pub const API_KEY_INVALID: i64 = 1001;
    pub const API_KEY_MISSING: i64 = 1002;
    pub const API_KEY_PLAN_REQUIRES_PAYMENT: i64 = 1003;
    pub const API_KEY_PLAN_PAYMENT_EXPIRED: i64 = 1004;
    pub const API_KEY_REQUIRED: i64 = 1005;
    pub const API_KEY_PLAN_NOT_AUTHORIZED: i64 = 1006;
    pub const API_KEY_DISABLED: i64 = 1007;
    pub const API_KEY_PLAN_MINUTE_RATE_LIMIT_REACHED: i64 = 1008;
    pub const API_KEY_PLAN_DAILY_RATE_LIMIT_REACHED: i64 = 1009;
    pub const API_KEY_PLAN_MONTHLY_RATE_LIMIT_REACHED: i64 = 1010;
    pub const IP_RATE_LIMIT_REACHED: i64 = 1011;
}
