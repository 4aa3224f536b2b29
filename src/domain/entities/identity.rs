//! Identity record representing one randomly generated person.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person returned by the identity provider.
///
/// Text fields are trimmed and never empty: a blank upstream value becomes
/// `None`. `country` drives every downstream lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub picture: Option<String>,
    pub age: Option<u32>,
    pub date_of_birth: Option<NaiveDate>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub full_address: Option<String>,
}

impl IdentityRecord {
    /// Returns the person's display name, if any part of it is known.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
