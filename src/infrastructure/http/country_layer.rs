//! countrylayer.com client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::{endpoint, get_json};
use crate::domain::credentials::ApiKey;
use crate::domain::providers::{GeoProvider, RawCountry};
use crate::error::ProviderError;

/// Geography provider backed by countrylayer's full-name lookup.
///
/// `GET {base}/name/{country}?access_key=..&fullText=true`
#[derive(Clone)]
pub struct CountryLayerClient {
    http: Client,
    base: Url,
}

impl CountryLayerClient {
    pub fn new(http: Client, base: Url) -> Self {
        Self { http, base }
    }
}

#[async_trait]
impl GeoProvider for CountryLayerClient {
    async fn lookup(&self, country: &str, key: &ApiKey) -> Result<Vec<RawCountry>, ProviderError> {
        let url = endpoint(&self.base, &["name", country])?;
        let request = self
            .http
            .get(url)
            .query(&[("access_key", key.expose()), ("fullText", "true")]);

        match get_json(request).await? {
            body @ Value::Array(_) => {
                serde_json::from_value(body).map_err(|e| ProviderError::malformed(e.to_string()))
            }
            _ => Err(ProviderError::malformed("expected a list of countries")),
        }
    }
}
