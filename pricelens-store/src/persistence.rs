//! Snapshot file I/O.
//!
//! Reads are forgiving (a corrupt previous snapshot degrades to "no
//! previous snapshot"); writes are atomic via temp file + rename so a
//! crash mid-write can never leave a half-written snapshot behind.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use pricelens_core::PricingSnapshot;

use crate::error::StoreError;

/// Default snapshot location, relative to the working directory.
pub fn default_output_path() -> PathBuf {
    PathBuf::from("pricing.json")
}

// ============================================================================
// Load
// ============================================================================

/// Loads the previous snapshot if one exists and parses.
///
/// Returns `None` for a missing file, and for an unreadable or malformed
/// one (with a warning): a broken previous snapshot costs the middle
/// fallback tier, nothing more.
pub async fn load_snapshot(path: &Path) -> Option<PricingSnapshot> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no previous snapshot");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read previous snapshot");
            return None;
        }
    };

    match serde_json::from_slice::<PricingSnapshot>(&bytes) {
        Ok(snapshot) => {
            info!(
                path = %path.display(),
                api_models = snapshot.api_models.len(),
                plans = snapshot.plans.len(),
                "loaded previous snapshot"
            );
            Some(snapshot)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "previous snapshot is malformed, ignoring");
            None
        }
    }
}

// ============================================================================
// Save
// ============================================================================

/// Writes the snapshot atomically.
///
/// Prices are rounded to 6 decimals and invariants validated before
/// anything touches the disk. The write goes to a temp file in the same
/// directory, then renames over the target.
///
/// # Errors
///
/// `StoreError::Invalid` if the snapshot violates its invariants,
/// `StoreError::Io` / `StoreError::Serialization` on write failure. This
/// is the one error the caller treats as fatal.
pub async fn save_snapshot(path: &Path, snapshot: &mut PricingSnapshot) -> Result<(), StoreError> {
    snapshot.round_prices();
    snapshot.validate()?;

    let json = serde_json::to_string_pretty(snapshot)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(path = %parent.display(), "creating output directory");
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &json).await?;
    tokio::fs::rename(&temp_path, path).await?;

    info!(
        path = %path.display(),
        api_models = snapshot.api_models.len(),
        plans = snapshot.plans.len(),
        extracted = snapshot.extracted_count(),
        "snapshot written"
    );
    Ok(())
}
