//! Exchange adapter: rates keyed by the geography record's currency code.

use std::sync::Arc;

use async_trait::async_trait;

use super::SourceAdapter;
use crate::application::normalizer::normalize_rates;
use crate::domain::credentials::ApiKey;
use crate::domain::entities::{ExchangeRecord, ExchangeSource};
use crate::domain::providers::ExchangeProvider;
use crate::utils::text_normalizer::normalize_text;

/// Wraps an [`ExchangeProvider`] and its optional credential.
///
/// With a credential the keyed endpoint is used, otherwise the public one;
/// the record's `provider` says which.
pub struct ExchangeAdapter<P: ExchangeProvider> {
    provider: Arc<P>,
    key: Option<ApiKey>,
}

impl<P: ExchangeProvider> ExchangeAdapter<P> {
    pub fn new(provider: Arc<P>, key: Option<ApiKey>) -> Self {
        Self { provider, key }
    }

    fn source(&self) -> ExchangeSource {
        if self.key.is_some() {
            ExchangeSource::Keyed
        } else {
            ExchangeSource::Public
        }
    }
}

#[async_trait]
impl<P: ExchangeProvider> SourceAdapter for ExchangeAdapter<P> {
    type Input = Option<String>;
    type Output = ExchangeRecord;

    fn provider_name(&self) -> &'static str {
        "ExchangeRate"
    }

    async fn fetch(&self, base: Option<String>) -> ExchangeRecord {
        let provider = self.provider_name();

        let Some(base) = normalize_text(base.as_deref()) else {
            tracing::warn!(provider, "no currency code, skipping rates");
            return ExchangeRecord::degraded(
                None,
                None,
                format!("{provider}: no currency code available"),
            );
        };

        let source = self.source();
        let outcome = self
            .provider
            .rates(&base, self.key.clone())
            .await
            .and_then(|raw| normalize_rates(&base, &raw, source));

        match outcome {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(provider, %source, base = %base, error = %e, "rates lookup failed");
                ExchangeRecord::degraded(Some(base), Some(source), format!("{provider} error: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::{MockExchangeProvider, RawRates};
    use crate::error::ProviderError;
    use serde_json::json;

    fn rates() -> RawRates {
        serde_json::from_value(json!({
            "rates": { "USD": 1.08, "KZT": 510.0 },
            "time_last_update_utc": "Fri, 16 Oct 2026 00:00:01 +0000"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_exchange_public_fallback_without_key() {
        let mut provider = MockExchangeProvider::new();
        provider
            .expect_rates()
            .withf(|base, key| base == "EUR" && key.is_none())
            .times(1)
            .returning(|_, _| Ok(rates()));

        let adapter = ExchangeAdapter::new(Arc::new(provider), None);
        let record = adapter.fetch(Some("EUR".to_string())).await;

        assert!(record.ok);
        assert_eq!(record.usd, Some(1.08));
        assert_eq!(record.kzt, Some(510.0));
        assert_eq!(record.provider.as_deref(), Some("open.er-api.com (fallback)"));
    }

    #[tokio::test]
    async fn test_exchange_prefers_keyed_endpoint() {
        let mut provider = MockExchangeProvider::new();
        provider
            .expect_rates()
            .withf(|_, key| key.as_ref().map(|k| k.expose()) == Some("fx-secret"))
            .times(1)
            .returning(|_, _| Ok(rates()));

        let adapter = ExchangeAdapter::new(Arc::new(provider), ApiKey::new("fx-secret"));
        let record = adapter.fetch(Some("EUR".to_string())).await;

        assert_eq!(record.provider.as_deref(), Some("exchangerate-api.com (keyed)"));
    }

    #[tokio::test]
    async fn test_exchange_missing_code_skips_call() {
        let mut provider = MockExchangeProvider::new();
        provider.expect_rates().times(0);

        let adapter = ExchangeAdapter::new(Arc::new(provider), None);
        let record = adapter.fetch(None).await;

        assert!(!record.ok);
        assert_eq!(
            record.message.as_deref(),
            Some("ExchangeRate: no currency code available")
        );
        assert!(record.base.is_none());
        assert!(record.provider.is_none());
    }

    #[tokio::test]
    async fn test_exchange_error_keeps_attempted_provider() {
        let mut provider = MockExchangeProvider::new();
        provider
            .expect_rates()
            .times(1)
            .returning(|_, _| Err(ProviderError::upstream(404, "unsupported-code")));

        let adapter = ExchangeAdapter::new(Arc::new(provider), ApiKey::new("fx-secret"));
        let record = adapter.fetch(Some("XYZ".to_string())).await;

        assert!(!record.ok);
        assert_eq!(record.base.as_deref(), Some("XYZ"));
        assert!(record.usd.is_none());
        assert_eq!(record.provider.as_deref(), Some("exchangerate-api.com (keyed)"));
        assert!(record.message.unwrap().contains("unsupported-code"));
    }

    #[tokio::test]
    async fn test_exchange_missing_rate_table_degrades() {
        let mut provider = MockExchangeProvider::new();
        provider
            .expect_rates()
            .times(1)
            .returning(|_, _| Ok(RawRates::default()));

        let adapter = ExchangeAdapter::new(Arc::new(provider), None);
        let record = adapter.fetch(Some("EUR".to_string())).await;

        assert!(!record.ok);
        assert_eq!(
            record.message.as_deref(),
            Some("ExchangeRate error: malformed payload: missing rates")
        );
    }
}
