//! Data Transfer Objects for API responses.
//!
//! The profile envelope itself is the domain type
//! [`ProfileResult`](crate::domain::entities::ProfileResult), serialized as-is.

pub mod health;
