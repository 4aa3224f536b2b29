//! Source adapters: one per upstream capability, all with the same shape.
//!
//! An adapter owns its provider and credential, validates its input, performs
//! one provider call and normalizes the payload. Geography, exchange and news
//! adapters never fail: every problem becomes a degraded record. The identity
//! adapter is the exception because nothing downstream can run without it.
//!
//! # Available Adapters
//!
//! - [`IdentityAdapter`] - `()` → `Result<IdentityRecord, ProviderError>`
//! - [`GeographyAdapter`] - country name → [`GeoRecord`](crate::domain::entities::GeoRecord)
//! - [`ExchangeAdapter`] - currency code → [`ExchangeRecord`](crate::domain::entities::ExchangeRecord)
//! - [`NewsAdapter`] - country name → [`NewsRecord`](crate::domain::entities::NewsRecord)

pub mod exchange_adapter;
pub mod geography_adapter;
pub mod identity_adapter;
pub mod news_adapter;

pub use exchange_adapter::ExchangeAdapter;
pub use geography_adapter::GeographyAdapter;
pub use identity_adapter::IdentityAdapter;
pub use news_adapter::NewsAdapter;

use async_trait::async_trait;

/// Uniform contract shared by all source adapters.
///
/// `Input` is `Option` for the dependent adapters: a missing upstream value is
/// passed through and handled as a degraded outcome, never skipped.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    type Input: Send + 'static;
    type Output: Send;

    /// Human-readable provider name used as the prefix of diagnostics.
    fn provider_name(&self) -> &'static str;

    async fn fetch(&self, input: Self::Input) -> Self::Output;
}
