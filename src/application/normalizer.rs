//! Conversion of raw provider payloads into canonical records.
//!
//! These functions are pure: the same payload always yields the same record.
//! Field-level rules come from [`crate::utils::text_normalizer`].

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::domain::entities::news::MAX_ARTICLES;
use crate::domain::entities::{Article, ExchangeRecord, ExchangeSource, GeoRecord, IdentityRecord};
use crate::domain::providers::{RawArticle, RawCountry, RawRates, RawUser};
use crate::error::ProviderError;
use crate::utils::text_normalizer::{
    contains_ignore_case, finite_number, first_present, non_negative_integer, normalize_json_text,
    normalize_text,
};

/// Primary reference currency.
pub const PRIMARY_CURRENCY: &str = "USD";
/// Secondary reference currency.
pub const SECONDARY_CURRENCY: &str = "KZT";

/// Normalizes one random person.
///
/// # Rules
///
/// - `picture`: `large → medium → thumbnail`
/// - `full_address`: street number and name joined by a space
/// - `date_of_birth`: UTC date of the RFC3339 `dob.date`
/// - `age`: only a non-negative integer
pub fn normalize_identity(raw: &RawUser) -> IdentityRecord {
    let name = raw.name.as_ref();
    let location = raw.location.as_ref();
    let picture = raw.picture.as_ref();
    let dob = raw.dob.as_ref();

    let street = location.and_then(|l| l.street.as_ref());
    let address_parts: Vec<String> = [
        street.and_then(|s| normalize_json_text(s.number.as_ref())),
        street.and_then(|s| normalize_json_text(s.name.as_ref())),
    ]
    .into_iter()
    .flatten()
    .collect();

    IdentityRecord {
        first_name: normalize_text(name.and_then(|n| n.first.as_deref())),
        last_name: normalize_text(name.and_then(|n| n.last.as_deref())),
        gender: normalize_text(raw.gender.as_deref()),
        picture: first_present([
            picture.and_then(|p| p.large.as_deref()),
            picture.and_then(|p| p.medium.as_deref()),
            picture.and_then(|p| p.thumbnail.as_deref()),
        ]),
        age: non_negative_integer(dob.and_then(|d| d.age.as_ref())),
        date_of_birth: dob.and_then(|d| d.date.as_deref()).and_then(parse_birth_date),
        city: normalize_text(location.and_then(|l| l.city.as_deref())),
        country: normalize_text(location.and_then(|l| l.country.as_deref())),
        full_address: normalize_text(Some(address_parts.join(" ").as_str())),
    }
}

fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Normalizes the best country match.
///
/// `queried` stands in for the name when the provider omits it.
///
/// # Errors
///
/// Returns [`ProviderError::Empty`] when the provider matched nothing.
pub fn normalize_country(
    matches: &[RawCountry],
    queried: &str,
) -> Result<GeoRecord, ProviderError> {
    let country = matches.first().ok_or(ProviderError::Empty)?;

    let languages = country
        .languages
        .iter()
        .filter_map(|l| normalize_text(l.name.as_deref()))
        .collect();

    let currency = country.currencies.first();
    let flags = country.flags.as_ref();

    Ok(GeoRecord {
        ok: true,
        message: None,
        name: normalize_text(country.name.as_deref()).or_else(|| normalize_text(Some(queried))),
        capital: normalize_text(country.capital.as_deref()),
        languages,
        currency_code: first_present([
            currency.and_then(|c| c.code.as_deref()),
            currency.and_then(|c| c.name.as_deref()),
        ]),
        flag: first_present([
            country.flag.as_deref(),
            flags.and_then(|f| f.png.as_deref()),
            flags.and_then(|f| f.svg.as_deref()),
        ]),
    })
}

/// Normalizes a rate table for `base`.
///
/// # Errors
///
/// Returns [`ProviderError::Malformed`] when neither `conversion_rates` nor
/// `rates` is present.
pub fn normalize_rates(
    base: &str,
    raw: &RawRates,
    source: ExchangeSource,
) -> Result<ExchangeRecord, ProviderError> {
    let table: &Map<String, Value> = raw
        .conversion_rates
        .as_ref()
        .or(raw.rates.as_ref())
        .ok_or_else(|| ProviderError::malformed("missing rates"))?;

    Ok(ExchangeRecord {
        ok: true,
        message: None,
        base: Some(base.to_string()),
        usd: finite_number(table.get(PRIMARY_CURRENCY)),
        kzt: finite_number(table.get(SECONDARY_CURRENCY)),
        updated_utc: normalize_text(raw.time_last_update_utc.as_deref()),
        provider: Some(source.label().to_string()),
    })
}

/// Keeps the first [`MAX_ARTICLES`] articles whose title mentions `country`.
///
/// Provider order is preserved; the upstream already sorts by recency.
pub fn normalize_articles(country: &str, raw: &[RawArticle]) -> Vec<Article> {
    raw.iter()
        .filter_map(|article| {
            let title = normalize_text(article.title.as_deref())?;
            if !contains_ignore_case(&title, country) {
                return None;
            }

            Some(Article {
                title,
                image: normalize_text(article.url_to_image.as_deref()),
                description: normalize_text(article.description.as_deref()),
                url: normalize_text(article.url.as_deref()),
                source: normalize_text(article.source.as_ref().and_then(|s| s.name.as_deref())),
            })
        })
        .take(MAX_ARTICLES)
        .collect()
}
