#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_test::TestServer;
use profile_aggregator::config::{Config, ProviderEndpoints};
use profile_aggregator::domain::credentials::ApiKey;
use profile_aggregator::routes::router;
use profile_aggregator::state::AppState;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

pub const GEO_KEY: &str = "geo-test-key";
pub const FX_KEY: &str = "fx-test-key";
pub const NEWS_KEY: &str = "news-test-key";

/// How the fake identity upstream behaves.
#[derive(Clone, Copy)]
pub enum IdentityMode {
    Person(&'static str),
    EmptyResults,
    ServerError,
}

/// Behaviour switches for the fake upstream.
#[derive(Clone, Copy)]
pub struct Upstream {
    pub identity: IdentityMode,
    /// Delay applied to the geography endpoint.
    pub geo_delay: Duration,
    /// When true the keyed exchange endpoint rejects every key.
    pub fx_rejects_key: bool,
    /// When true the news page also carries loosely typed articles.
    pub odd_articles: bool,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            identity: IdentityMode::Person("France"),
            geo_delay: Duration::ZERO,
            fx_rejects_key: false,
            odd_articles: false,
        }
    }
}

pub fn person(country: &str) -> Value {
    json!({
        "results": [{
            "gender": "female",
            "name": { "title": "Mrs", "first": "Louise", "last": " Martin " },
            "location": {
                "street": { "number": 8, "name": "Rue Mercière" },
                "city": "Lyon",
                "country": country
            },
            "dob": { "date": "1986-02-11T04:20:00.000Z", "age": 40 },
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/12.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/12.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/12.jpg"
            }
        }],
        "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
    })
}

pub fn france() -> Value {
    json!([{
        "name": "France",
        "capital": "Paris",
        "languages": [{ "iso639_1": "fr", "name": "French" }],
        "currencies": [{ "code": "EUR", "name": "Euro", "symbol": "€" }],
        "flag": "https://restcountries.eu/data/fra.svg"
    }])
}

pub fn euro_rates(keyed: bool) -> Value {
    let table = json!({ "EUR": 1, "USD": 1.08, "KZT": 510.0, "GBP": 0.86 });
    if keyed {
        json!({
            "result": "success",
            "base_code": "EUR",
            "time_last_update_utc": "Fri, 16 Oct 2026 00:00:01 +0000",
            "conversion_rates": table
        })
    } else {
        json!({
            "result": "success",
            "base_code": "EUR",
            "time_last_update_utc": "Fri, 16 Oct 2026 00:02:31 +0000",
            "rates": table
        })
    }
}

/// Twenty articles, only two of which mention France in the title.
pub fn news_page() -> Value {
    let articles: Vec<Value> = (0..20)
        .map(|i| {
            let title = match i {
                4 => "Strikes spread across FRANCE".to_string(),
                11 => "Why france is betting on nuclear".to_string(),
                _ => format!("European markets update #{i}"),
            };
            json!({
                "source": { "id": null, "name": "Example Wire" },
                "title": title,
                "description": "  ",
                "url": format!("https://news.example/{i}"),
                "urlToImage": format!("https://news.example/{i}.jpg"),
                "publishedAt": "2026-10-16T07:00:00Z"
            })
        })
        .collect();

    json!({ "status": "ok", "totalResults": 20, "articles": articles })
}

/// Articles with wrongly typed fields, as some feeds send them.
///
/// The first two decode with the odd fields dropped or stringified; the last
/// one has a bare string `source` and cannot be decoded at all.
pub fn odd_articles() -> Vec<Value> {
    vec![
        json!({ "title": 2026, "description": { "html": "<p>France</p>" } }),
        json!({ "title": "France lifts fuel tax", "description": ["x"], "urlToImage": 42 }),
        json!({ "source": "France Wire", "title": "France wins the final" }),
    ]
}

fn query_has(uri: &Uri, pair: &str) -> bool {
    uri.query()
        .map(|q| q.split('&').any(|p| p == pair))
        .unwrap_or(false)
}

/// Builds the fake upstream router.
///
/// Paths:
/// - `/randomuser/`
/// - `/countrylayer/name/{country}`
/// - `/fx-keyed/{key}/latest/{base}`
/// - `/fx-public/latest/{base}`
/// - `/news/everything`
pub fn upstream_router(upstream: Upstream) -> Router {
    let identity = move || async move {
        match upstream.identity {
            IdentityMode::Person(country) => Json(person(country)).into_response(),
            IdentityMode::EmptyResults => Json(json!({ "results": [] })).into_response(),
            IdentityMode::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Uh oh, something has gone wrong." })),
            )
                .into_response(),
        }
    };

    let country = move |Path(name): Path<String>, uri: Uri| async move {
        tokio::time::sleep(upstream.geo_delay).await;

        if !query_has(&uri, &format!("access_key={GEO_KEY}")) {
            return Json(json!({
                "success": false,
                "error": {
                    "code": 101,
                    "type": "invalid_access_key",
                    "info": "You have not supplied a valid API Access Key."
                }
            }))
            .into_response();
        }

        if name == "France" {
            Json(france()).into_response()
        } else {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "status": 404, "message": "Not Found" })),
            )
                .into_response()
        }
    };

    let fx_keyed = move |Path((key, base)): Path<(String, String)>| async move {
        if upstream.fx_rejects_key || key != FX_KEY {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "result": "error", "error-type": "invalid-key" })),
            )
                .into_response();
        }
        fx_response(&base, true)
    };

    let fx_public = |Path(base): Path<String>| async move { fx_response(&base, false) };

    let news = move |headers: HeaderMap, uri: Uri| async move {
        let authorized = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == NEWS_KEY);

        if !authorized {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "status": "error",
                    "code": "apiKeyInvalid",
                    "message": "Your API key is invalid or incorrect."
                })),
            )
                .into_response();
        }

        if !query_has(&uri, "qInTitle=France") || !query_has(&uri, "language=en") {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "status": "error", "message": "unexpected query" })),
            )
                .into_response();
        }

        let mut page = news_page();
        if upstream.odd_articles
            && let Some(articles) = page["articles"].as_array_mut()
        {
            articles.extend(odd_articles());
        }

        Json(page).into_response()
    };

    Router::new()
        .route("/randomuser/", get(identity))
        .route("/countrylayer/name/{country}", get(country))
        .route("/fx-keyed/{key}/latest/{base}", get(fx_keyed))
        .route("/fx-public/latest/{base}", get(fx_public))
        .route("/news/everything", get(news))
}

fn fx_response(base: &str, keyed: bool) -> Response {
    if base == "EUR" {
        Json(euro_rates(keyed)).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "result": "error", "error-type": "unsupported-code" })),
        )
            .into_response()
    }
}

/// Serves `router` on an ephemeral local port.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn endpoints(addr: SocketAddr) -> ProviderEndpoints {
    let url = |path: &str| Url::parse(&format!("http://{addr}{path}")).unwrap();
    ProviderEndpoints {
        random_user: url("/randomuser/"),
        country_layer: url("/countrylayer/"),
        exchange_keyed: url("/fx-keyed/"),
        exchange_public: url("/fx-public/"),
        news_api: url("/news/everything"),
    }
}

/// Configuration pointing at the fake upstream with every credential set.
pub fn config(addr: SocketAddr) -> Config {
    Config {
        provider_timeout_secs: 2,
        countrylayer_api_key: ApiKey::new("geo-test-key"),
        exchange_api_key: ApiKey::new("fx-test-key"),
        news_api_key: ApiKey::new("news-test-key"),
        endpoints: endpoints(addr),
        ..Config::default()
    }
}

pub fn static_dir() -> String {
    format!("{}/tests/fixtures/public", env!("CARGO_MANIFEST_DIR"))
}

pub fn test_server(config: &Config) -> TestServer {
    let state = AppState::from_config(config).unwrap();
    TestServer::new(router(state, &static_dir())).unwrap()
}

/// Spawns the fake upstream and returns a server wired to it.
pub async fn profile_server(upstream: Upstream) -> TestServer {
    let addr = spawn(upstream_router(upstream)).await;
    test_server(&config(addr))
}
