//! Utility functions shared across layers.
//!
//! - [`text_normalizer`] - Trimming, fallback chains and number validation for
//!   provider payloads

pub mod text_normalizer;
