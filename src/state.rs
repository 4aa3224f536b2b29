//! Shared application state injected into handlers.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::adapters::{ExchangeAdapter, GeographyAdapter, IdentityAdapter, NewsAdapter};
use crate::application::services::ProfileService;
use crate::config::Config;
use crate::infrastructure::http::{
    CountryLayerClient, ExchangeRateClient, NewsApiClient, RandomUserClient, build_client,
};

/// Profile service wired to the real HTTP providers.
pub type HttpProfileService =
    ProfileService<RandomUserClient, CountryLayerClient, ExchangeRateClient, NewsApiClient>;

#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<HttpProfileService>,
}

impl AppState {
    pub fn new(profile_service: Arc<HttpProfileService>) -> Self {
        Self { profile_service }
    }

    /// Builds the provider clients and adapters from configuration.
    ///
    /// All providers share one HTTP connection pool. Credentials are handed to
    /// the adapters here and never looked up again.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = build_client(config.provider_timeout()).context("Failed to create HTTP client")?;
        let endpoints = &config.endpoints;

        let identity = IdentityAdapter::new(Arc::new(RandomUserClient::new(
            http.clone(),
            endpoints.random_user.clone(),
        )));
        let geography = GeographyAdapter::new(
            Arc::new(CountryLayerClient::new(
                http.clone(),
                endpoints.country_layer.clone(),
            )),
            config.countrylayer_api_key.clone(),
        );
        let exchange = ExchangeAdapter::new(
            Arc::new(ExchangeRateClient::new(
                http.clone(),
                endpoints.exchange_keyed.clone(),
                endpoints.exchange_public.clone(),
            )),
            config.exchange_api_key.clone(),
        );
        let news = NewsAdapter::new(
            Arc::new(NewsApiClient::new(http, endpoints.news_api.clone())),
            config.news_api_key.clone(),
        );

        let service = ProfileService::new(identity, geography, exchange, news);
        Ok(Self::new(Arc::new(service)))
    }
}
