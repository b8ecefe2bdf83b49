//! Rendered-page text acquisition.
//!
//! The extraction engine only needs "the text of the page at this URL";
//! how that text is produced is behind [`PageFetcher`] so tests can inject
//! fixtures and a JS-rendering implementation can slot in without touching
//! the engine.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::client::HttpClient;
use crate::error::FetchError;

// ============================================================================
// Page Fetcher Trait
// ============================================================================

/// Turns a URL into rendered page text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page at `url` and returns its text.
    ///
    /// `wait_hint` names content the page is expected to contain once
    /// fully rendered; implementations that drive a real browser wait for
    /// it, others may ignore it. `timeout` bounds the whole acquisition —
    /// exceeding it is an ordinary [`FetchError`], handled like any other
    /// fetch failure.
    async fn fetch_rendered_text(
        &self,
        url: &str,
        wait_hint: Option<&str>,
        timeout: Duration,
    ) -> Result<String, FetchError>;
}

// ============================================================================
// HTTP Implementation
// ============================================================================

/// [`PageFetcher`] backed by a plain HTTP body fetch.
///
/// Marketing pages that server-render their pricing work as-is; pages that
/// require client-side JS yield text without prices, which reads as an
/// extraction miss and falls through the fallback chain. `wait_hint` is
/// accepted for interface compatibility and ignored.
pub struct HttpPageFetcher;

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_rendered_text(
        &self,
        url: &str,
        wait_hint: Option<&str>,
        timeout: Duration,
    ) -> Result<String, FetchError> {
        if let Some(hint) = wait_hint {
            debug!(hint, "wait hint ignored by HTTP fetcher");
        }
        let client = HttpClient::with_timeout(timeout);
        client.get_text(url).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixture fetcher used across the workspace's engine tests.
    struct FixtureFetcher(&'static str);

    #[async_trait]
    impl PageFetcher for FixtureFetcher {
        async fn fetch_rendered_text(
            &self,
            _url: &str,
            _wait_hint: Option<&str>,
            _timeout: Duration,
        ) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn trait_object_dispatch() {
        let fetcher: Box<dyn PageFetcher> = Box::new(FixtureFetcher("Input $3.00 / 1M"));
        let text = fetcher
            .fetch_rendered_text("https://example.com", None, Duration::from_secs(1))
            .await
            .unwrap();
        assert!(text.contains("$3.00"));
    }
}
