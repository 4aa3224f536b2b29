//! REST API layer for HTTP request/response handling.
//!
//! This layer exposes the aggregation pipeline over HTTP and formats its
//! envelope for the presentation client.
//!
//! # Modules
//!
//! - [`dto`] - Response DTOs that are not domain records
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
