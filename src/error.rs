//! Errors raised by upstream provider calls.
//!
//! Only the identity adapter lets a [`ProviderError`] escape; every other
//! adapter folds it into a degraded record.

use thiserror::Error;

/// Failure of a single upstream call.
///
/// Display output is safe to return to clients: it never contains the request
/// URL, which for some providers embeds the credential.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("empty response")]
    Empty,
}

impl ProviderError {
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Self::Timeout;
        }

        let is_decode = e.is_decode();
        let e = e.without_url();

        if is_decode {
            Self::Malformed(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
