//! Geography adapter: country metadata keyed by the identity's country name.

use std::sync::Arc;

use async_trait::async_trait;

use super::SourceAdapter;
use crate::application::normalizer::normalize_country;
use crate::domain::credentials::ApiKey;
use crate::domain::entities::GeoRecord;
use crate::domain::providers::GeoProvider;
use crate::error::ProviderError;
use crate::utils::text_normalizer::normalize_text;

/// Environment variable holding the geography credential.
pub const COUNTRYLAYER_KEY_VAR: &str = "COUNTRYLAYER_API_KEY";

/// Wraps a [`GeoProvider`] and its credential.
pub struct GeographyAdapter<P: GeoProvider> {
    provider: Arc<P>,
    key: Option<ApiKey>,
}

impl<P: GeoProvider> GeographyAdapter<P> {
    pub fn new(provider: Arc<P>, key: Option<ApiKey>) -> Self {
        Self { provider, key }
    }
}

#[async_trait]
impl<P: GeoProvider> SourceAdapter for GeographyAdapter<P> {
    type Input = Option<String>;
    type Output = GeoRecord;

    fn provider_name(&self) -> &'static str {
        "Countrylayer"
    }

    /// Looks up `country`.
    ///
    /// # Degraded Outcomes
    ///
    /// - Blank or missing country: no call is made
    /// - Missing credential: no call is made
    /// - Transport, upstream or payload error, or no matching country
    async fn fetch(&self, country: Option<String>) -> GeoRecord {
        let provider = self.provider_name();

        let Some(country) = normalize_text(country.as_deref()) else {
            tracing::warn!(provider, "country missing, skipping lookup");
            return GeoRecord::degraded(None, format!("{provider}: country missing"));
        };

        let Some(key) = &self.key else {
            tracing::warn!(provider, "{} is not configured", COUNTRYLAYER_KEY_VAR);
            return GeoRecord::degraded(
                Some(country),
                format!("{provider}: {COUNTRYLAYER_KEY_VAR} is not configured"),
            );
        };

        let outcome = self
            .provider
            .lookup(&country, key)
            .await
            .and_then(|matches| normalize_country(&matches, &country));

        match outcome {
            Ok(record) => record,
            Err(ProviderError::Empty) => {
                tracing::warn!(provider, country = %country, "no country matched");
                let message = format!("{provider} error: no country matches '{country}'");
                GeoRecord::degraded(Some(country), message)
            }
            Err(e) => {
                tracing::warn!(provider, country = %country, error = %e, "country lookup failed");
                GeoRecord::degraded(Some(country), format!("{provider} error: {e}"))
            }
        }
    }
}
