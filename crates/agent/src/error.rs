//! Typed error enum for the external film source.

use thiserror::Error;

/// Errors from the film-source request.
///
/// These never cross the agent's public boundary: `fetch_and_import`
/// collapses them all into the not-found outcome and logs the distinct
/// cause, so callers see the same negative result for a dead source and
/// an absent title.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl SourceError {
    /// Whether this error is transient (connect failure, timeout, 5xx) as
    /// opposed to a malformed response.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Status { code, .. } => matches!(code, 408 | 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}
