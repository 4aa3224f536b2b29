//! Provider credentials.

use std::fmt;

/// An API key for one upstream provider.
///
/// `Debug` and `Display` never print the secret, so keys can sit inside
/// structs that are logged or formatted into errors.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key. Blank input yields `None`: an empty variable counts
    /// as unset.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Reads a key from the environment. Missing or blank means `None`.
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var).ok().and_then(Self::new)
    }

    /// Exposes the secret for building a request.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_unset() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
    }

    #[test]
    fn test_key_is_trimmed() {
        let key = ApiKey::new(" abc123 \n").unwrap();
        assert_eq!(key.expose(), "abc123");
    }

    #[test]
    fn test_key_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();

        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.to_string(), "***");
        assert!(!format!("{:?}", Some(key)).contains("super-secret"));
    }
}
