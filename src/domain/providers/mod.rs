//! Provider trait definitions for the domain layer.
//!
//! Each trait abstracts one third-party capability and returns its raw,
//! provider-shaped payload. Normalization and failure policy live in the
//! adapters ([`crate::application::adapters`]), so providers stay thin.
//!
//! # Architecture
//!
//! - Traits define the contract for one upstream call
//! - HTTP implementations live in `crate::infrastructure::http`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Providers
//!
//! - [`IdentityProvider`] - One random person
//! - [`GeoProvider`] - Country metadata by name
//! - [`ExchangeProvider`] - Rate table for a base currency
//! - [`NewsProvider`] - Articles mentioning a country

pub mod exchange_provider;
pub mod geo_provider;
pub mod identity_provider;
pub mod news_provider;

pub use exchange_provider::{ExchangeProvider, RawRates};
pub use geo_provider::{GeoProvider, RawCountry, RawCurrency, RawFlags, RawLanguage};
pub use identity_provider::{
    IdentityProvider, RawDob, RawLocation, RawName, RawPicture, RawStreet, RawUser,
};
pub use news_provider::{NewsProvider, RawArticle, RawSource};

#[cfg(test)]
pub use exchange_provider::MockExchangeProvider;
#[cfg(test)]
pub use geo_provider::MockGeoProvider;
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
#[cfg(test)]
pub use news_provider::MockNewsProvider;
