//! Fetch error types.

use thiserror::Error;

/// Error type for content acquisition.
///
/// All variants are recovered at the source boundary: a fetch failure
/// means the source's fields resolve through the fallback chain. Nothing
/// here is ever process-fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Non-2xx response.
    #[error("HTTP status {status} from {url}")]
    Status {
        /// Response status code.
        status: u16,
        /// Request URL.
        url: String,
    },

    /// Response body could not be interpreted.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Folds a `reqwest` error into the taxonomy, mapping timeouts to
    /// their own variant so logs distinguish slow pages from broken ones.
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_secs)
        } else {
            Self::Http(err)
        }
    }
}
