//! Store error types.

use thiserror::Error;

/// Errors that can occur while persisting the snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot violated its own invariants before write.
    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] pricelens_core::CoreError),
}
