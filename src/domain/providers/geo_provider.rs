//! Provider trait for country metadata.

use crate::domain::credentials::ApiKey;
use crate::error::ProviderError;
use crate::utils::text_normalizer::lenient_text;
use async_trait::async_trait;
use serde::Deserialize;

/// One country entry from the geography upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCountry {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub capital: Option<String>,
    pub languages: Vec<RawLanguage>,
    pub currencies: Vec<RawCurrency>,
    #[serde(deserialize_with = "lenient_text")]
    pub flag: Option<String>,
    pub flags: Option<RawFlags>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawLanguage {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCurrency {
    #[serde(deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawFlags {
    #[serde(deserialize_with = "lenient_text")]
    pub png: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub svg: Option<String>,
}

/// Source of country metadata.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::CountryLayerClient`] - countrylayer.com
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Looks up countries matching `country` by full name.
    ///
    /// Returns the upstream's match list in its own order; it may be empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] on transport failure, timeout, an upstream
    /// error body or a payload that is not a list of countries.
    async fn lookup(&self, country: &str, key: &ApiKey) -> Result<Vec<RawCountry>, ProviderError>;
}
