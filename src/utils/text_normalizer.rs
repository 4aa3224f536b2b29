//! Field-level normalization shared by all provider payloads.
//!
//! Upstream payloads are loosely typed: strings may be padded or empty, numbers
//! may arrive as strings, images come in several sizes. These helpers reduce a
//! raw value to either a meaningful value or `None`.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Trims a string and maps blank input to `None`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_text(Some("  Paris ")), Some("Paris".to_string()));
/// assert_eq!(normalize_text(Some("   ")), None);
/// assert_eq!(normalize_text(None), None);
/// ```
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes a JSON scalar as text.
///
/// Strings are trimmed, numbers are rendered as text (street numbers arrive as
/// integers, occasionally as integral floats). Anything else is absent.
pub fn normalize_json_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => normalize_text(Some(s)),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// Renders a JSON number without a trailing `.0` on integral floats.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}

/// Deserializes a scalar as text without failing on the wrong JSON type.
///
/// Strings pass through untouched and numbers are rendered as text; objects,
/// arrays, booleans and nulls become `None`. Used on raw payload fields so one
/// odd value drops a field instead of the whole payload.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(number_text(&n)),
        _ => None,
    })
}

/// Returns the first candidate that survives normalization.
///
/// Used for fallback chains such as `large → medium → thumbnail`.
pub fn first_present<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .find_map(|candidate| normalize_text(candidate))
}

/// Accepts only finite JSON numbers.
///
/// Numeric strings, booleans and nulls are rejected rather than coerced, so a
/// malformed rate never surfaces as `0` or `NaN`.
pub fn finite_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Accepts only non-negative JSON integers that fit in `u32`.
pub fn non_negative_integer(value: Option<&Value>) -> Option<u32> {
    value?.as_u64().and_then(|v| u32::try_from(v).ok())
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
