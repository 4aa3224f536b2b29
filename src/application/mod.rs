//! Application layer: adapters, normalization and orchestration.
//!
//! This layer turns raw provider payloads into canonical records and decides
//! call ordering and failure policy. It consumes the provider traits from
//! [`crate::domain::providers`] and knows nothing about HTTP.
//!
//! # Modules
//!
//! - [`normalizer`] - Pure payload → record conversion
//! - [`adapters`] - One adapter per provider, uniform `fetch` contract
//! - [`services::profile_service::ProfileService`] - The aggregation pipeline

pub mod adapters;
pub mod normalizer;
pub mod services;
