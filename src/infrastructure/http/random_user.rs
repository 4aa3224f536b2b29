//! randomuser.me client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::get_json;
use crate::domain::providers::{IdentityProvider, RawUser};
use crate::error::ProviderError;

#[derive(Debug, Default, Deserialize)]
struct RandomUserResponse {
    #[serde(default)]
    results: Vec<RawUser>,
}

/// Identity provider backed by randomuser.me.
#[derive(Clone)]
pub struct RandomUserClient {
    http: Client,
    base: Url,
}

impl RandomUserClient {
    pub fn new(http: Client, base: Url) -> Self {
        Self { http, base }
    }
}

#[async_trait]
impl IdentityProvider for RandomUserClient {
    async fn fetch_one(&self) -> Result<Option<RawUser>, ProviderError> {
        let body = get_json(self.http.get(self.base.clone())).await?;

        let response: RandomUserResponse =
            serde_json::from_value(body).map_err(|e| ProviderError::malformed(e.to_string()))?;

        Ok(response.results.into_iter().next())
    }
}
