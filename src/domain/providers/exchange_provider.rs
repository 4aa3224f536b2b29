//! Provider trait for currency exchange rates.

use crate::domain::credentials::ApiKey;
use crate::error::ProviderError;
use crate::utils::text_normalizer::lenient_text;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Rate table for one base currency.
///
/// The keyed endpoint answers with `conversion_rates`, the public one with
/// `rates`. Values stay untyped until normalization validates them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRates {
    pub conversion_rates: Option<Map<String, Value>>,
    pub rates: Option<Map<String, Value>>,
    #[serde(deserialize_with = "lenient_text")]
    pub time_last_update_utc: Option<String>,
}

/// Source of exchange rates.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ExchangeRateClient`] - exchangerate-api.com
///   with an open.er-api.com fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExchangeProvider: Send + Sync {
    /// Fetches rates for `base`.
    ///
    /// With `Some(key)` the credentialed endpoint is called; with `None` the
    /// public endpoint is.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] on transport failure, timeout or an
    /// upstream error body.
    async fn rates(&self, base: &str, key: Option<ApiKey>) -> Result<RawRates, ProviderError>;
}
