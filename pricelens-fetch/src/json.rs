//! Structured JSON document acquisition.
//!
//! Some vendors publish a real pricing API (loosely structured JSON with
//! no schema guarantee). The engine consumes it through [`JsonFetcher`]
//! for the same reason page text goes through `PageFetcher`: tests inject
//! fixtures, and the engine never talks to the network directly.

use async_trait::async_trait;
use std::time::Duration;

use crate::client::HttpClient;
use crate::error::FetchError;

/// Turns a URL into a parsed JSON document.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Fetches and parses the document at `url`.
    ///
    /// Fails with [`FetchError`] on timeout, non-2xx, or a malformed body.
    async fn fetch_json(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<serde_json::Value, FetchError>;
}

/// [`JsonFetcher`] backed by [`HttpClient`].
pub struct HttpJsonFetcher;

#[async_trait]
impl JsonFetcher for HttpJsonFetcher {
    async fn fetch_json(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<serde_json::Value, FetchError> {
        let client = HttpClient::with_timeout(timeout);
        client.get_json(url).await
    }
}
