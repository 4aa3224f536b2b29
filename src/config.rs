//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Credentials
//!
//! ```bash
//! export COUNTRYLAYER_API_KEY="..."
//! export EXCHANGE_API_KEY="..."   # optional, public endpoint used otherwise
//! export NEWS_API_KEY="..."
//! ```
//!
//! A missing or empty credential is not a startup error: the matching source
//! degrades on every request with a message naming the variable.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served for non-API paths (default: `public`)
//! - `PROVIDER_TIMEOUT_SECS` - Per-call upstream timeout (default: 15, range 1..=120)
//! - `RANDOMUSER_URL`, `COUNTRYLAYER_URL`, `EXCHANGE_KEYED_URL`,
//!   `EXCHANGE_PUBLIC_URL`, `NEWSAPI_URL` - Upstream base URL overrides

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::application::adapters::geography_adapter::COUNTRYLAYER_KEY_VAR;
use crate::application::adapters::news_adapter::NEWS_KEY_VAR;
use crate::domain::credentials::ApiKey;

/// Environment variable holding the exchange credential.
pub const EXCHANGE_KEY_VAR: &str = "EXCHANGE_API_KEY";

const DEFAULT_RANDOMUSER_URL: &str = "https://randomuser.me/api/";
const DEFAULT_COUNTRYLAYER_URL: &str = "https://api.countrylayer.com/v2/";
const DEFAULT_EXCHANGE_KEYED_URL: &str = "https://v6.exchangerate-api.com/v6/";
const DEFAULT_EXCHANGE_PUBLIC_URL: &str = "https://open.er-api.com/v6/";
const DEFAULT_NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";

/// Base URLs of the upstream providers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderEndpoints {
    pub random_user: Url,
    pub country_layer: Url,
    pub exchange_keyed: Url,
    pub exchange_public: Url,
    pub news_api: Url,
}

impl ProviderEndpoints {
    /// Loads endpoints, falling back to the public production URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not a valid URL.
    fn from_env() -> Result<Self> {
        Ok(Self {
            random_user: load_url("RANDOMUSER_URL", DEFAULT_RANDOMUSER_URL)?,
            country_layer: load_url("COUNTRYLAYER_URL", DEFAULT_COUNTRYLAYER_URL)?,
            exchange_keyed: load_url("EXCHANGE_KEYED_URL", DEFAULT_EXCHANGE_KEYED_URL)?,
            exchange_public: load_url("EXCHANGE_PUBLIC_URL", DEFAULT_EXCHANGE_PUBLIC_URL)?,
            news_api: load_url("NEWSAPI_URL", DEFAULT_NEWSAPI_URL)?,
        })
    }

    fn all(&self) -> [(&'static str, &Url); 5] {
        [
            ("RANDOMUSER_URL", &self.random_user),
            ("COUNTRYLAYER_URL", &self.country_layer),
            ("EXCHANGE_KEYED_URL", &self.exchange_keyed),
            ("EXCHANGE_PUBLIC_URL", &self.exchange_public),
            ("NEWSAPI_URL", &self.news_api),
        ]
    }
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        let parse = |s: &str| Url::parse(s).expect("default endpoint URLs are valid");
        Self {
            random_user: parse(DEFAULT_RANDOMUSER_URL),
            country_layer: parse(DEFAULT_COUNTRYLAYER_URL),
            exchange_keyed: parse(DEFAULT_EXCHANGE_KEYED_URL),
            exchange_public: parse(DEFAULT_EXCHANGE_PUBLIC_URL),
            news_api: parse(DEFAULT_NEWSAPI_URL),
        }
    }
}

fn load_url(var: &str, default: &str) -> Result<Url> {
    let raw = env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    Url::parse(raw.trim()).with_context(|| format!("{var} is not a valid URL: '{raw}'"))
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Directory served for every path outside `/api`.
    pub static_dir: String,
    /// Per-call timeout applied to every upstream request.
    pub provider_timeout_secs: u64,
    pub countrylayer_api_key: Option<ApiKey>,
    /// Selects the keyed exchange endpoint when set.
    pub exchange_api_key: Option<ApiKey>,
    pub news_api_key: Option<ApiKey>,
    pub endpoints: ProviderEndpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "public".to_string(),
            provider_timeout_secs: 15,
            countrylayer_api_key: None,
            exchange_api_key: None,
            news_api_key: None,
            endpoints: ProviderEndpoints::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable or an endpoint override cannot be
    /// parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        let provider_timeout_secs = match env::var("PROVIDER_TIMEOUT_SECS") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PROVIDER_TIMEOUT_SECS must be an integer, got '{v}'"))?,
            Err(_) => 15,
        };

        let endpoints =
            ProviderEndpoints::from_env().context("Failed to load provider endpoints")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            provider_timeout_secs,
            countrylayer_api_key: ApiKey::from_env(COUNTRYLAYER_KEY_VAR),
            exchange_api_key: ApiKey::from_env(EXCHANGE_KEY_VAR),
            news_api_key: ApiKey::from_env(NEWS_KEY_VAR),
            endpoints,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `provider_timeout_secs` is outside `1..=120`
    /// - an endpoint is not `http` or `https`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.provider_timeout_secs == 0 || self.provider_timeout_secs > 120 {
            anyhow::bail!(
                "PROVIDER_TIMEOUT_SECS must be between 1 and 120, got {}",
                self.provider_timeout_secs
            );
        }

        for (var, url) in self.endpoints.all() {
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!("{var} must use http or https, got '{}'", url);
            }
        }

        Ok(())
    }

    /// Per-call upstream timeout.
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static files: {}", self.static_dir);
        tracing::info!("  Provider timeout: {}s", self.provider_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        for (var, key) in self.credentials() {
            tracing::info!("  {}: {}", var, credential_status(key));
        }
    }

    /// Credential variables and their values, in display order.
    pub fn credentials(&self) -> [(&'static str, Option<&ApiKey>); 3] {
        [
            (COUNTRYLAYER_KEY_VAR, self.countrylayer_api_key.as_ref()),
            (EXCHANGE_KEY_VAR, self.exchange_api_key.as_ref()),
            (NEWS_KEY_VAR, self.news_api_key.as_ref()),
        ]
    }
}

/// Describes a credential without revealing it.
pub fn credential_status(key: Option<&ApiKey>) -> &'static str {
    if key.is_some() {
        "configured"
    } else {
        "not configured"
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
