//! Source error types.

use thiserror::Error;

/// Errors surfacing from a source run.
///
/// Fetch failures and extraction misses never appear here — they are
/// absorbed by the fallback chain inside the engine. What remains is
/// configuration defects (which registry validation should have caught at
/// startup) and the runner's panic bulkhead.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Engine-level defect (bad rule, invalid spec data).
    #[error("Core error: {0}")]
    Core(#[from] pricelens_core::CoreError),

    /// A source task died (panic or cancellation).
    #[error("Source task crashed: {0}")]
    Crashed(String),
}
