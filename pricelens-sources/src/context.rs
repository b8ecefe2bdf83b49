//! Execution context shared by all source runs.

use std::sync::Arc;
use std::time::Duration;

use pricelens_fetch::{HttpJsonFetcher, HttpPageFetcher, JsonFetcher, PageFetcher};

/// Page fetch timeout; marketing pages can be slow to respond.
const PAGE_TIMEOUT_SECS: u64 = 40;

/// Structured API timeout.
const API_TIMEOUT_SECS: u64 = 30;

/// Collaborators and limits shared (read-only) by every source task.
#[derive(Clone)]
pub struct SourceContext {
    /// Rendered-page text acquisition.
    pub page: Arc<dyn PageFetcher>,
    /// Structured JSON document acquisition.
    pub json: Arc<dyn JsonFetcher>,
    /// Timeout for page fetches.
    pub page_timeout: Duration,
    /// Timeout for structured API fetches.
    pub api_timeout: Duration,
}

impl SourceContext {
    /// Production context backed by plain HTTP fetchers.
    pub fn new() -> Self {
        Self {
            page: Arc::new(HttpPageFetcher),
            json: Arc::new(HttpJsonFetcher),
            page_timeout: Duration::from_secs(PAGE_TIMEOUT_SECS),
            api_timeout: Duration::from_secs(API_TIMEOUT_SECS),
        }
    }

    /// Context with injected fetchers, used by tests and alternate
    /// renderer implementations.
    pub fn with_fetchers(page: Arc<dyn PageFetcher>, json: Arc<dyn JsonFetcher>) -> Self {
        Self {
            page,
            json,
            page_timeout: Duration::from_secs(PAGE_TIMEOUT_SECS),
            api_timeout: Duration::from_secs(API_TIMEOUT_SECS),
        }
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::new()
    }
}
