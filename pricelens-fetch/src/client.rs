//! HTTP client with tracing and sane defaults.
//!
//! Thin wrapper over `reqwest` that pins a timeout and user agent, traces
//! every request, and converts non-2xx responses into typed errors.

use reqwest::{header, Client};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::error::FetchError;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for PriceLens.
const USER_AGENT: &str = concat!("PriceLens/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper used for structured pricing APIs and page bodies.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a client with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying client cannot be built, which only happens
    /// when the system TLS configuration is fundamentally broken and no
    /// network operation could succeed anyway.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                panic!(
                    "Failed to create HTTP client: {e}. \
                    This usually indicates a broken TLS/SSL configuration."
                )
            });

        Self {
            inner: client,
            timeout,
        }
    }

    /// The configured timeout, in whole seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }

    fn check_url(url: &str) -> Result<(), FetchError> {
        Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        Ok(())
    }

    /// Fetches a URL and returns the response body as text.
    ///
    /// # Errors
    ///
    /// `FetchError::Status` on non-2xx, `FetchError::Timeout` on timeout,
    /// `FetchError::Http` on transport failure.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        Self::check_url(url)?;
        debug!("GET request");

        let response = self
            .inner
            .get(url)
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout_secs()))?;

        let status = response.status();
        debug!(status = %status, "Response received");
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout_secs()))
    }

    /// Fetches a URL and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// As [`HttpClient::get_text`], plus `FetchError::Json` on a malformed
    /// body.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        assert!(HttpClient::check_url("not a url").is_err());
        assert!(HttpClient::check_url("https://example.com/pricing").is_ok());
    }

    #[test]
    fn timeout_is_exposed_in_seconds() {
        let client = HttpClient::with_timeout(Duration::from_secs(40));
        assert_eq!(client.timeout_secs(), 40);
    }
}
