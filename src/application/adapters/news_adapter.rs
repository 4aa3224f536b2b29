//! News adapter: recent headlines mentioning the identity's country.

use std::sync::Arc;

use async_trait::async_trait;

use super::SourceAdapter;
use crate::application::normalizer::normalize_articles;
use crate::domain::credentials::ApiKey;
use crate::domain::entities::NewsRecord;
use crate::domain::providers::NewsProvider;
use crate::utils::text_normalizer::normalize_text;

/// Environment variable holding the news credential.
pub const NEWS_KEY_VAR: &str = "NEWS_API_KEY";

/// Wraps a [`NewsProvider`] and its credential.
pub struct NewsAdapter<P: NewsProvider> {
    provider: Arc<P>,
    key: Option<ApiKey>,
}

impl<P: NewsProvider> NewsAdapter<P> {
    pub fn new(provider: Arc<P>, key: Option<ApiKey>) -> Self {
        Self { provider, key }
    }
}

#[async_trait]
impl<P: NewsProvider> SourceAdapter for NewsAdapter<P> {
    type Input = Option<String>;
    type Output = NewsRecord;

    fn provider_name(&self) -> &'static str {
        "NewsAPI"
    }

    /// Searches articles about `country`.
    ///
    /// A successful search with no matching titles is still `ok` with an
    /// empty list.
    async fn fetch(&self, country: Option<String>) -> NewsRecord {
        let provider = self.provider_name();

        let Some(country) = normalize_text(country.as_deref()) else {
            tracing::warn!(provider, "country missing, skipping search");
            return NewsRecord::degraded(None, format!("{provider}: country missing"));
        };

        let Some(key) = &self.key else {
            tracing::warn!(provider, "{} is not configured", NEWS_KEY_VAR);
            return NewsRecord::degraded(
                Some(country),
                format!("{provider}: {NEWS_KEY_VAR} is not configured"),
            );
        };

        match self.provider.search(&country, key).await {
            Ok(raw) => {
                let articles = normalize_articles(&country, &raw);
                tracing::debug!(
                    provider,
                    country = %country,
                    received = raw.len(),
                    kept = articles.len(),
                    "news filtered"
                );
                NewsRecord {
                    ok: true,
                    message: None,
                    country: Some(country),
                    articles,
                }
            }
            Err(e) => {
                tracing::warn!(provider, country = %country, error = %e, "news search failed");
                NewsRecord::degraded(Some(country), format!("{provider} error: {e}"))
            }
        }
    }
}
