//! Canonical records produced by the source adapters.
//!
//! Every record is an immutable value built once per aggregation run and
//! discarded after the envelope is emitted. Field names serialize in
//! camelCase because the presentation client reads them verbatim.
//!
//! # Record Types
//!
//! - [`IdentityRecord`] - A random person, the root of the dependency graph
//! - [`GeoRecord`] - Country metadata keyed by the identity's country name
//! - [`ExchangeRecord`] - Rates keyed by the geography record's currency code
//! - [`NewsRecord`] - Recent headlines keyed by the identity's country name
//! - [`ProfileResult`] - The envelope wrapping all of the above
//!
//! # Degraded Records
//!
//! Geography, exchange and news records carry an `ok` flag and a diagnostic
//! `message`. A degraded record is built with its `degraded` constructor, which
//! keeps only the lookup key; callers must branch on `ok`, not on nulls.

pub mod exchange;
pub mod geography;
pub mod identity;
pub mod news;
pub mod profile;

pub use exchange::{ExchangeRecord, ExchangeSource};
pub use geography::GeoRecord;
pub use identity::IdentityRecord;
pub use news::{Article, NewsRecord};
pub use profile::{Profile, ProfileFailure, ProfileMeta, ProfileResult};
