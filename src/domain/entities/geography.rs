//! Country metadata record.

use serde::{Deserialize, Serialize};

/// Country metadata resolved from the identity's country name.
///
/// `name` echoes the lookup key on degraded records so the client can show
/// which country failed; every other field is empty in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRecord {
    pub ok: bool,
    pub message: Option<String>,
    pub name: Option<String>,
    pub capital: Option<String>,
    pub languages: Vec<String>,
    pub currency_code: Option<String>,
    pub flag: Option<String>,
}

impl GeoRecord {
    /// Builds a degraded record carrying only the lookup key.
    pub fn degraded(name: Option<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            name,
            capital: None,
            languages: Vec::new(),
            currency_code: None,
            flag: None,
        }
    }
}
