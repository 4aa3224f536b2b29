//! newsapi.org client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::get_json;
use crate::domain::credentials::ApiKey;
use crate::domain::providers::{NewsProvider, RawArticle};
use crate::error::ProviderError;

const PAGE_SIZE: &str = "15";

/// Articles stay untyped so one malformed entry is skipped on its own.
#[derive(Debug, Default, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Value>,
}

/// News provider backed by newsapi.org `/v2/everything`.
#[derive(Clone)]
pub struct NewsApiClient {
    http: Client,
    base: Url,
}

impl NewsApiClient {
    pub fn new(http: Client, base: Url) -> Self {
        Self { http, base }
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn search(&self, country: &str, key: &ApiKey) -> Result<Vec<RawArticle>, ProviderError> {
        let request = self
            .http
            .get(self.base.clone())
            .header("X-Api-Key", key.expose())
            .query(&[
                ("qInTitle", country),
                ("language", "en"),
                ("pageSize", PAGE_SIZE),
                ("sortBy", "publishedAt"),
            ]);

        let body = get_json(request).await?;
        let response: EverythingResponse =
            serde_json::from_value(body).map_err(|e| ProviderError::malformed(e.to_string()))?;

        let received = response.articles.len();
        let articles: Vec<RawArticle> = response
            .articles
            .into_iter()
            .filter_map(|article| serde_json::from_value(article).ok())
            .collect();

        if articles.len() < received {
            tracing::debug!(
                skipped = received - articles.len(),
                "undecodable articles skipped"
            );
        }

        Ok(articles)
    }
}
