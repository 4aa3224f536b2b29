//! Response envelope for one aggregation run.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use super::{ExchangeRecord, GeoRecord, IdentityRecord, NewsRecord};

/// Envelope metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMeta {
    #[serde(serialize_with = "serialize_millis")]
    pub generated_at: DateTime<Utc>,
}

/// A fully assembled profile. Only produced when identity resolution succeeded.
///
/// The wire names `user` and `country` are kept for the existing client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    #[serde(rename = "user")]
    pub identity: IdentityRecord,
    #[serde(rename = "country")]
    pub geography: GeoRecord,
    pub exchange: ExchangeRecord,
    pub news: NewsRecord,
    pub meta: ProfileMeta,
}

/// Fatal outcome: no partial data is ever attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileFailure {
    pub message: String,
}

/// Outcome of one aggregation run.
///
/// Serializes as `{"ok": true, "user": .., "country": .., "exchange": ..,
/// "news": .., "meta": {"generatedAt": ..}}` or `{"ok": false, "message": ..}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileResult {
    Success(Box<Profile>),
    Failure(ProfileFailure),
}

impl ProfileResult {
    /// Wraps the four records with a fresh generation timestamp.
    pub fn assemble(
        identity: IdentityRecord,
        geography: GeoRecord,
        exchange: ExchangeRecord,
        news: NewsRecord,
    ) -> Self {
        Self::Success(Box::new(Profile {
            identity,
            geography,
            exchange,
            news,
            meta: ProfileMeta {
                generated_at: Utc::now(),
            },
        }))
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(ProfileFailure {
            message: message.into(),
        })
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the profile on success.
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Success(profile) => Some(profile),
            Self::Failure(_) => None,
        }
    }
}

impl Serialize for ProfileResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            ok: bool,
            #[serde(flatten)]
            body: &'a T,
        }

        match self {
            Self::Success(profile) => Envelope {
                ok: true,
                body: profile.as_ref(),
            }
            .serialize(serializer),
            Self::Failure(failure) => Envelope {
                ok: false,
                body: failure,
            }
            .serialize(serializer),
        }
    }
}

/// Formats timestamps like `2026-10-16T08:30:00.123Z`.
fn serialize_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
