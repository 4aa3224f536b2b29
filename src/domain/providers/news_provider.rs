//! Provider trait for news search.

use crate::domain::credentials::ApiKey;
use crate::error::ProviderError;
use crate::utils::text_normalizer::lenient_text;
use async_trait::async_trait;
use serde::Deserialize;

/// One article as returned by the news upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawArticle {
    pub source: Option<RawSource>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub url_to_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSource {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

/// Source of news articles.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::NewsApiClient`] - newsapi.org
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Searches English-language articles with `country` in the title, newest
    /// first.
    ///
    /// The upstream's title matching is looser than ours, so callers filter
    /// the result again.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] on transport failure, timeout or an
    /// upstream error body.
    async fn search(&self, country: &str, key: &ApiKey) -> Result<Vec<RawArticle>, ProviderError>;
}
