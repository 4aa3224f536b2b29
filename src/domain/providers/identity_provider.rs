//! Provider trait for random identities.

use crate::error::ProviderError;
use crate::utils::text_normalizer::lenient_text;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// One person as returned by the identity upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawUser {
    #[serde(deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    pub name: Option<RawName>,
    pub location: Option<RawLocation>,
    pub dob: Option<RawDob>,
    pub picture: Option<RawPicture>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawName {
    #[serde(deserialize_with = "lenient_text")]
    pub first: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawLocation {
    pub street: Option<RawStreet>,
    #[serde(deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub country: Option<String>,
}

/// Street parts are kept as JSON values: the number is usually an integer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawStreet {
    pub number: Option<Value>,
    pub name: Option<Value>,
}

/// `age` is untyped so a non-numeric value can be discarded during
/// normalization instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawDob {
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    pub age: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPicture {
    #[serde(deserialize_with = "lenient_text")]
    pub large: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub medium: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub thumbnail: Option<String>,
}

/// Source of random identities.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::RandomUserClient`] - randomuser.me
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetches one person.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))` with the first result of the response
    /// - `Ok(None)` if the upstream answered with an empty result list
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] on transport failure, timeout, non-2xx
    /// status or an undecodable body.
    async fn fetch_one(&self) -> Result<Option<RawUser>, ProviderError>;
}
