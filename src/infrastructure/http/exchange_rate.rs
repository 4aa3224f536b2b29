//! exchangerate-api.com client with an open.er-api.com fallback.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{endpoint, get_json};
use crate::domain::credentials::ApiKey;
use crate::domain::providers::{ExchangeProvider, RawRates};
use crate::error::ProviderError;

/// Exchange provider with two endpoints.
///
/// - keyed: `GET {keyed_base}/{key}/latest/{base}`
/// - public: `GET {public_base}/latest/{base}`
///
/// The keyed URL embeds the credential, which is why transport errors are
/// stripped of their URL before they are displayed.
#[derive(Clone)]
pub struct ExchangeRateClient {
    http: Client,
    keyed_base: Url,
    public_base: Url,
}

impl ExchangeRateClient {
    pub fn new(http: Client, keyed_base: Url, public_base: Url) -> Self {
        Self {
            http,
            keyed_base,
            public_base,
        }
    }
}

#[async_trait]
impl ExchangeProvider for ExchangeRateClient {
    async fn rates(&self, base: &str, key: Option<ApiKey>) -> Result<RawRates, ProviderError> {
        let url = match &key {
            Some(key) => endpoint(&self.keyed_base, &[key.expose(), "latest", base])?,
            None => endpoint(&self.public_base, &["latest", base])?,
        };

        let body = get_json(self.http.get(url)).await?;
        serde_json::from_value(body).map_err(|e| ProviderError::malformed(e.to_string()))
    }
}
