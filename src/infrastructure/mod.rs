//! Infrastructure layer for external integrations.
//!
//! This layer implements the provider traits defined by the domain layer over
//! HTTP.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` clients for the four upstream providers

pub mod http;
