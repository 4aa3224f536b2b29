//! Identity adapter: the root of the aggregation graph.

use std::sync::Arc;

use async_trait::async_trait;

use super::SourceAdapter;
use crate::application::normalizer::normalize_identity;
use crate::domain::entities::IdentityRecord;
use crate::domain::providers::IdentityProvider;
use crate::error::ProviderError;

/// Wraps an [`IdentityProvider`]. Has no degraded mode.
pub struct IdentityAdapter<P: IdentityProvider> {
    provider: Arc<P>,
}

impl<P: IdentityProvider> IdentityAdapter<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: IdentityProvider> SourceAdapter for IdentityAdapter<P> {
    type Input = ();
    type Output = Result<IdentityRecord, ProviderError>;

    fn provider_name(&self) -> &'static str {
        "RandomUser"
    }

    /// Fetches and normalizes one person.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Empty`] if the upstream produced no result and
    /// propagates every other provider error unchanged.
    async fn fetch(&self, _input: ()) -> Result<IdentityRecord, ProviderError> {
        let raw = self.provider.fetch_one().await?.ok_or(ProviderError::Empty)?;
        Ok(normalize_identity(&raw))
    }
}
