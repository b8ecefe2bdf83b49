//! Core error types for `PriceLens`.

use thiserror::Error;

/// Core error type for `PriceLens` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A source specification is malformed (bad rule pattern, missing
    /// default, duplicate identity). Caught at registry construction,
    /// never at resolution time.
    #[error("Invalid source spec: {0}")]
    InvalidSpec(String),

    /// Invalid data in a snapshot or record.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
