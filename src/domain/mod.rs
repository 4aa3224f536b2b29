//! Domain layer containing the canonical records and provider contracts.
//!
//! Nothing here performs I/O. The application layer drives the providers and
//! the infrastructure layer implements them over HTTP.
//!
//! # Architecture
//!
//! - [`entities`] - Canonical records and the response envelope
//! - [`providers`] - Upstream capability traits and their raw payloads
//! - [`credentials`] - Redacting wrapper for provider API keys
//!
//! # Dependency Graph
//!
//! 1. Identity is fetched first; its country name keys everything else
//! 2. Geography and news run concurrently on that country name
//! 3. Exchange runs on geography's currency code once geography resolves

pub mod credentials;
pub mod entities;
pub mod providers;
