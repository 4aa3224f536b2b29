//! HTTP request handlers for API endpoints.

pub mod health;
pub mod profile;

pub use health::health_handler;
pub use profile::profile_handler;
