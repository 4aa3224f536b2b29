mod common;

use axum::http::StatusCode;
use common::{FX_KEY, GEO_KEY, IdentityMode, NEWS_KEY, Upstream};
use profile_aggregator::domain::credentials::ApiKey;
use serde_json::Value;
use std::time::Duration;

#[tokio::test]
async fn test_profile_all_sources_succeed() {
    let server = common::profile_server(Upstream::default()).await;

    let response = server.get("/api/profile").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["ok"], true);

    assert_eq!(json["user"]["firstName"], "Louise");
    assert_eq!(json["user"]["lastName"], "Martin");
    assert_eq!(json["user"]["age"], 40);
    assert_eq!(json["user"]["dateOfBirth"], "1986-02-11");
    assert_eq!(json["user"]["fullAddress"], "8 Rue Mercière");
    assert_eq!(json["user"]["country"], "France");

    assert_eq!(json["country"]["ok"], true);
    assert_eq!(json["country"]["name"], "France");
    assert_eq!(json["country"]["capital"], "Paris");
    assert_eq!(json["country"]["currencyCode"], "EUR");
    assert_eq!(json["country"]["languages"], serde_json::json!(["French"]));

    assert_eq!(json["exchange"]["ok"], true);
    assert_eq!(json["exchange"]["base"], "EUR");
    assert_eq!(json["exchange"]["usd"], 1.08);
    assert_eq!(json["exchange"]["kzt"], 510.0);
    assert_eq!(json["exchange"]["provider"], "exchangerate-api.com (keyed)");
    assert_eq!(
        json["exchange"]["updatedUTC"],
        "Fri, 16 Oct 2026 00:00:01 +0000"
    );

    assert_eq!(json["news"]["ok"], true);
    let articles = json["news"]["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0]["title"], "Strikes spread across FRANCE");
    assert_eq!(articles[1]["title"], "Why france is betting on nuclear");
    assert_eq!(articles[0]["source"], "Example Wire");
    assert!(articles[0]["description"].is_null());

    assert!(json["meta"]["generatedAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_profile_legacy_alias() {
    let server = common::profile_server(Upstream::default()).await;

    let response = server.get("/api/user-info").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["country"]["name"], "France");
}

#[tokio::test]
async fn test_profile_without_credentials_degrades_sections() {
    let addr = common::spawn(common::upstream_router(Upstream::default())).await;
    let mut config = common::config(addr);
    config.countrylayer_api_key = None;
    config.exchange_api_key = None;
    config.news_api_key = None;
    let server = common::test_server(&config);

    let response = server.get("/api/profile").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["user"]["country"], "France");

    assert_eq!(json["country"]["ok"], false);
    assert_eq!(json["country"]["name"], "France");
    assert_eq!(
        json["country"]["message"],
        "Countrylayer: COUNTRYLAYER_API_KEY is not configured"
    );

    assert_eq!(json["exchange"]["ok"], false);
    assert_eq!(
        json["exchange"]["message"],
        "ExchangeRate: no currency code available"
    );

    assert_eq!(json["news"]["ok"], false);
    assert_eq!(
        json["news"]["message"],
        "NewsAPI: NEWS_API_KEY is not configured"
    );
    assert_eq!(json["news"]["articles"], serde_json::json!([]));
}

#[tokio::test]
async fn test_profile_exchange_falls_back_to_public_endpoint() {
    let addr = common::spawn(common::upstream_router(Upstream::default())).await;
    let mut config = common::config(addr);
    config.exchange_api_key = None;
    let server = common::test_server(&config);

    let json = server.get("/api/profile").await.json::<Value>();

    assert_eq!(json["exchange"]["ok"], true);
    assert_eq!(json["exchange"]["provider"], "open.er-api.com (fallback)");
    assert_eq!(
        json["exchange"]["updatedUTC"],
        "Fri, 16 Oct 2026 00:02:31 +0000"
    );
}

#[tokio::test]
async fn test_profile_rejected_keys_do_not_leak() {
    let addr = common::spawn(common::upstream_router(Upstream {
        fx_rejects_key: true,
        ..Upstream::default()
    }))
    .await;
    let mut config = common::config(addr);
    config.countrylayer_api_key = ApiKey::new("wrong-geo-key");
    config.news_api_key = ApiKey::new("wrong-news-key");
    let server = common::test_server(&config);

    let response = server.get("/api/profile").await;

    response.assert_status_ok();
    let body = response.text();

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["country"]["ok"], false);
    assert_eq!(
        json["country"]["message"],
        "Countrylayer error: upstream returned 200: You have not supplied a valid API Access Key."
    );
    assert_eq!(json["exchange"]["ok"], false);
    assert_eq!(
        json["exchange"]["message"],
        "ExchangeRate: no currency code available"
    );
    assert_eq!(json["news"]["ok"], false);
    assert_eq!(
        json["news"]["message"],
        "NewsAPI error: upstream returned 401: Your API key is invalid or incorrect."
    );

    for secret in ["wrong-geo-key", "wrong-news-key", GEO_KEY, NEWS_KEY] {
        assert!(!body.contains(secret), "response leaked {secret}");
    }
}

#[tokio::test]
async fn test_profile_keyed_exchange_error_hides_key() {
    let addr = common::spawn(common::upstream_router(Upstream {
        fx_rejects_key: true,
        ..Upstream::default()
    }))
    .await;
    let server = common::test_server(&common::config(addr));

    let response = server.get("/api/profile").await;

    let body = response.text();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["exchange"]["ok"], false);
    assert_eq!(json["exchange"]["base"], "EUR");
    assert_eq!(json["exchange"]["provider"], "exchangerate-api.com (keyed)");
    assert_eq!(
        json["exchange"]["message"],
        "ExchangeRate error: upstream returned 403: invalid-key"
    );
    assert!(!body.contains(FX_KEY));
}

#[tokio::test]
async fn test_profile_unreachable_exchange_hides_key() {
    let upstream = common::spawn(common::upstream_router(Upstream::default())).await;
    let closed = common::closed_addr().await;

    let mut config = common::config(upstream);
    config.endpoints.exchange_keyed = format!("http://{closed}/fx-keyed/").parse().unwrap();
    let server = common::test_server(&config);

    let body = server.get("/api/profile").await.text();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["ok"], true);
    assert_eq!(json["exchange"]["ok"], false);
    assert!(
        json["exchange"]["message"]
            .as_str()
            .unwrap()
            .starts_with("ExchangeRate error: transport error")
    );
    assert!(!body.contains(FX_KEY));
}

#[tokio::test]
async fn test_profile_slow_geography_times_out_alone() {
    let addr = common::spawn(common::upstream_router(Upstream {
        geo_delay: Duration::from_secs(3),
        ..Upstream::default()
    }))
    .await;
    let mut config = common::config(addr);
    config.provider_timeout_secs = 1;
    let server = common::test_server(&config);

    let response = server.get("/api/profile").await;

    response.assert_status_ok();
    let json = response.json::<Value>();

    assert_eq!(json["ok"], true);
    assert_eq!(json["country"]["ok"], false);
    assert_eq!(
        json["country"]["message"],
        "Countrylayer error: request timed out"
    );
    assert_eq!(json["exchange"]["ok"], false);
    assert_eq!(json["news"]["ok"], true);
    assert_eq!(json["news"]["articles"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_profile_unknown_country_degrades_geography_and_exchange() {
    let server = common::profile_server(Upstream {
        identity: IdentityMode::Person("Atlantis"),
        ..Upstream::default()
    })
    .await;

    let json = server.get("/api/profile").await.json::<Value>();

    assert_eq!(json["ok"], true);
    assert_eq!(json["user"]["country"], "Atlantis");
    assert_eq!(json["country"]["ok"], false);
    assert_eq!(json["country"]["name"], "Atlantis");
    assert_eq!(json["exchange"]["ok"], false);
    // the fake news upstream only answers queries for France
    assert_eq!(json["news"]["ok"], false);
    assert_eq!(json["news"]["country"], "Atlantis");
}

#[tokio::test]
async fn test_profile_identity_failure_is_fatal() {
    let server = common::profile_server(Upstream {
        identity: IdentityMode::ServerError,
        ..Upstream::default()
    })
    .await;

    let response = server.get("/api/profile").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["ok"], false);
    assert_eq!(
        json["message"],
        "RandomUser error: upstream returned 500: Uh oh, something has gone wrong."
    );
    assert!(json.get("user").is_none());
    assert!(json.get("country").is_none());
}

#[tokio::test]
async fn test_profile_identity_empty_is_fatal() {
    let server = common::profile_server(Upstream {
        identity: IdentityMode::EmptyResults,
        ..Upstream::default()
    })
    .await;

    let response = server.get("/api/profile").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["ok"], false);
    assert_eq!(json["message"], "RandomUser error: empty response");
}

#[tokio::test]
async fn test_profile_identity_unreachable_is_fatal() {
    let closed = common::closed_addr().await;
    let server = common::test_server(&common::config(closed));

    let response = server.get("/api/profile").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["ok"], false);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .starts_with("RandomUser error: transport error")
    );
}

#[tokio::test]
async fn test_profile_loosely_typed_articles_keep_news_ok() {
    let server = common::profile_server(Upstream {
        odd_articles: true,
        ..Upstream::default()
    })
    .await;

    let json = server.get("/api/profile").await.json::<Value>();

    assert_eq!(json["news"]["ok"], true);
    let articles = json["news"]["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[2]["title"], "France lifts fuel tax");
    assert_eq!(articles[2]["image"], "42");
    assert!(articles[2]["description"].is_null());
    assert!(
        articles
            .iter()
            .all(|a| a["title"] != "France wins the final")
    );
}
