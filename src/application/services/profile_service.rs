//! Profile aggregation service.

use crate::application::adapters::{
    ExchangeAdapter, GeographyAdapter, IdentityAdapter, NewsAdapter, SourceAdapter,
};
use crate::domain::entities::ProfileResult;
use crate::domain::providers::{ExchangeProvider, GeoProvider, IdentityProvider, NewsProvider};

/// Orchestrates the four source adapters into one [`ProfileResult`].
///
/// # Dependency Graph
///
/// ```text
/// identity ──┬── geography ── exchange
///            └── news
/// ```
///
/// Identity runs first and is the only fatal step. Geography and news then run
/// concurrently on the identity's country; exchange starts as soon as
/// geography resolves, whatever its outcome, so it overlaps with news.
///
/// Every call happens inside the returned future: dropping it (for example
/// when the client disconnects) cancels all in-flight upstream requests.
pub struct ProfileService<I, G, X, N>
where
    I: IdentityProvider,
    G: GeoProvider,
    X: ExchangeProvider,
    N: NewsProvider,
{
    identity: IdentityAdapter<I>,
    geography: GeographyAdapter<G>,
    exchange: ExchangeAdapter<X>,
    news: NewsAdapter<N>,
}

impl<I, G, X, N> ProfileService<I, G, X, N>
where
    I: IdentityProvider,
    G: GeoProvider,
    X: ExchangeProvider,
    N: NewsProvider,
{
    /// Creates a new profile service.
    pub fn new(
        identity: IdentityAdapter<I>,
        geography: GeographyAdapter<G>,
        exchange: ExchangeAdapter<X>,
        news: NewsAdapter<N>,
    ) -> Self {
        Self {
            identity,
            geography,
            exchange,
            news,
        }
    }

    /// Runs one aggregation.
    ///
    /// Returns [`ProfileResult::Failure`] only when identity resolution fails;
    /// any other source may degrade without affecting the rest.
    pub async fn run(&self) -> ProfileResult {
        let identity = match self.identity.fetch(()).await {
            Ok(identity) => identity,
            Err(e) => {
                let provider = self.identity.provider_name();
                tracing::error!(provider, error = %e, "identity resolution failed");
                return ProfileResult::failure(format!("{provider} error: {e}"));
            }
        };

        let country = identity.country.clone();
        tracing::debug!(country = ?country, "identity resolved");

        let geography_then_exchange = async {
            let geography = self.geography.fetch(country.clone()).await;
            let exchange = self.exchange.fetch(geography.currency_code.clone()).await;
            (geography, exchange)
        };
        let news = self.news.fetch(country.clone());

        let ((geography, exchange), news) = tokio::join!(geography_then_exchange, news);

        tracing::info!(
            country = ?country,
            geography_ok = geography.ok,
            exchange_ok = exchange.ok,
            news_ok = news.ok,
            articles = news.articles.len(),
            "profile assembled"
        );

        ProfileResult::assemble(identity, geography, exchange, news)
    }
}
