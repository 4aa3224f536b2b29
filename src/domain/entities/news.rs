//! News record and article entries.

use serde::{Deserialize, Serialize};

/// Maximum number of articles kept per record.
pub const MAX_ARTICLES: usize = 5;

/// One headline about the queried country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
}

/// Up to [`MAX_ARTICLES`] headlines mentioning `country`, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub ok: bool,
    pub message: Option<String>,
    pub country: Option<String>,
    pub articles: Vec<Article>,
}

impl NewsRecord {
    pub fn degraded(country: Option<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            country,
            articles: Vec::new(),
        }
    }
}
