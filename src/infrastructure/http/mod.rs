//! HTTP implementations of the provider traits.
//!
//! All clients share one pooled [`reqwest::Client`] built by [`build_client`];
//! cloning it is cheap and reuses the same connection pool.
//!
//! # Clients
//!
//! - [`RandomUserClient`] - [`IdentityProvider`](crate::domain::providers::IdentityProvider)
//! - [`CountryLayerClient`] - [`GeoProvider`](crate::domain::providers::GeoProvider)
//! - [`ExchangeRateClient`] - [`ExchangeProvider`](crate::domain::providers::ExchangeProvider)
//! - [`NewsApiClient`] - [`NewsProvider`](crate::domain::providers::NewsProvider)

mod country_layer;
mod exchange_rate;
mod news_api;
mod random_user;

pub use country_layer::CountryLayerClient;
pub use exchange_rate::ExchangeRateClient;
pub use news_api::NewsApiClient;
pub use random_user::RandomUserClient;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, header};
use serde_json::Value;
use url::Url;

use crate::error::ProviderError;

const MAX_MESSAGE_LEN: usize = 200;

/// Builds the shared HTTP client with a per-request timeout.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Appends percent-encoded path segments to `base`.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ProviderError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ProviderError::Transport("invalid endpoint URL".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends a GET request and returns its JSON body.
///
/// # Errors
///
/// - [`ProviderError::Timeout`] / [`ProviderError::Transport`] on I/O failure
/// - [`ProviderError::Upstream`] on a non-2xx status, or a 2xx body that
///   reports failure (`success: false`, `result: "error"`, `status: "error"`)
/// - [`ProviderError::Malformed`] if the body is not JSON
pub(crate) async fn get_json(request: RequestBuilder) -> Result<Value, ProviderError> {
    let response = request
        .header(header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    let json: Option<Value> = serde_json::from_str(&body).ok();

    if !status.is_success() {
        let message = json
            .as_ref()
            .and_then(upstream_message)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());
        return Err(ProviderError::upstream(status.as_u16(), message));
    }

    let json = json.ok_or_else(|| ProviderError::malformed("response is not JSON"))?;

    if reports_failure(&json) {
        let message = upstream_message(&json).unwrap_or_else(|| "request failed".to_string());
        return Err(ProviderError::upstream(status.as_u16(), message));
    }

    Ok(json)
}

/// Extracts the provider's own error text from an error body.
fn upstream_message(body: &Value) -> Option<String> {
    let candidates = [
        body.get("message"),
        body.get("error-type"),
        body.pointer("/error/info"),
        body.pointer("/error/message"),
        body.get("error"),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.chars().take(MAX_MESSAGE_LEN).collect())
}

fn reports_failure(body: &Value) -> bool {
    body.get("success").and_then(Value::as_bool) == Some(false)
        || body.get("result").and_then(Value::as_str) == Some("error")
        || body.get("status").and_then(Value::as_str) == Some("error")
}
