//! # Profile Aggregator
//!
//! Assembles a composite profile from four independent third-party providers
//! (random identity, country metadata, exchange rates, news) and tolerates the
//! failure of any of them except identity.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Canonical records and provider traits
//! - **Application Layer** ([`application`]) - Normalization, adapters and the aggregation pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for the upstream APIs
//! - **API Layer** ([`api`]) - REST handlers and middleware
//!
//! ## Pipeline
//!
//! 1. Identity is fetched; failure here fails the whole request
//! 2. Geography and news run concurrently on the identity's country
//! 3. Exchange runs on geography's currency code as soon as geography resolves
//! 4. All four records are wrapped in one envelope with a generation timestamp
//!
//! Degraded sections carry `ok: false` and a diagnostic message naming the
//! provider and the cause.
//!
//! ## Quick Start
//!
//! ```bash
//! export COUNTRYLAYER_API_KEY="..."
//! export NEWS_API_KEY="..."
//! cargo run
//! curl http://localhost:3000/api/profile
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::ProviderError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ProfileService;
    pub use crate::domain::entities::{
        Article, ExchangeRecord, GeoRecord, IdentityRecord, NewsRecord, ProfileResult,
    };
    pub use crate::error::ProviderError;
    pub use crate::state::AppState;
}
