//! Exchange-rate record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which upstream endpoint produced (or was asked for) the rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeSource {
    /// Credentialed endpoint, used whenever `EXCHANGE_API_KEY` is set.
    Keyed,
    /// Credential-free public endpoint.
    Public,
}

impl ExchangeSource {
    /// Label reported to the client in `provider`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Keyed => "exchangerate-api.com (keyed)",
            Self::Public => "open.er-api.com (fallback)",
        }
    }
}

impl fmt::Display for ExchangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rates from `base` to the two reference currencies (USD and KZT).
///
/// `updated_utc` is the provider's own freshness text and is passed through
/// unparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRecord {
    pub ok: bool,
    pub message: Option<String>,
    pub base: Option<String>,
    pub usd: Option<f64>,
    pub kzt: Option<f64>,
    #[serde(rename = "updatedUTC")]
    pub updated_utc: Option<String>,
    pub provider: Option<String>,
}

impl ExchangeRecord {
    /// Builds a degraded record carrying only the base currency and the
    /// provider that was attempted.
    pub fn degraded(
        base: Option<String>,
        source: Option<ExchangeSource>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            base,
            usd: None,
            kzt: None,
            updated_utc: None,
            provider: source.map(|s| s.label().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels() {
        assert_eq!(ExchangeSource::Keyed.label(), "exchangerate-api.com (keyed)");
        assert_eq!(ExchangeSource::Public.to_string(), "open.er-api.com (fallback)");
    }

    #[test]
    fn test_updated_utc_wire_name() {
        let record = ExchangeRecord {
            ok: true,
            message: None,
            base: Some("EUR".to_string()),
            usd: Some(1.08),
            kzt: None,
            updated_utc: Some("Fri, 16 Oct 2026 00:00:01 +0000".to_string()),
            provider: Some(ExchangeSource::Public.label().to_string()),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["updatedUTC"], "Fri, 16 Oct 2026 00:00:01 +0000");
        assert_eq!(json["usd"], 1.08);
        assert!(json["kzt"].is_null());
    }

    #[test]
    fn test_degraded_without_source() {
        let record = ExchangeRecord::degraded(None, None, "no currency code available");

        assert!(!record.ok);
        assert!(record.provider.is_none());
        assert!(record.usd.is_none());
    }
}
