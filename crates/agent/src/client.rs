use std::time::Duration;

use filmshelf_core::FETCH_TIMEOUT_SECS;

use crate::error::SourceError;
use crate::film::FilmEntry;

/// Client for the external film listing service.
#[derive(Debug)]
pub struct FilmClient {
    client: reqwest::Client,
    base_url: String,
}

impl FilmClient {
    /// Creates a client with the default 5-second request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(base_url, Duration::from_secs(FETCH_TIMEOUT_SECS))
    }

    /// Same as [`Self::new`] with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full film listing. One request, no retry, no backoff.
    ///
    /// # Errors
    /// Returns an error if the request fails or times out, the service
    /// answers with a non-success status, or the body does not parse as a
    /// film array.
    pub async fn films(&self) -> Result<Vec<FilmEntry>, SourceError> {
        let response = self.client.get(format!("{}/films", self.base_url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read error body".to_owned());
            return Err(SourceError::Status { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| SourceError::Parse {
            context: format!("film listing response (body: {})", truncate(&body, 200)),
            source,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
