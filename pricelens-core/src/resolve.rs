//! Three-tier fallback chain resolution.
//!
//! Every priced field passes through the same chain: freshly extracted
//! value, else the value from the previous snapshot, else the hardcoded
//! registry default. The resolver never fails — a registry entry without a
//! default cannot be constructed, so the last tier always exists.

use tracing::{info, warn};

use crate::models::Provenance;

// ============================================================================
// Resolved Field
// ============================================================================

/// One priced field after fallback resolution, before pair reconciliation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedField {
    /// The final numeric value.
    pub value: f64,
    /// Which tier produced it.
    pub status: Provenance,
}

impl ResolvedField {
    /// Creates a field with the given value and status.
    pub fn new(value: f64, status: Provenance) -> Self {
        Self { value, status }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolves one field through the fallback chain.
///
/// Priority: `extracted` > `prior` (previous snapshot) > `default`
/// (hardcoded). Emits a warning naming the field and the value used
/// whenever resolution lands below the `extracted` tier, so operators can
/// detect page/schema drift from the logs alone.
///
/// Fallback values bypass bounds checking: the prior value was accepted by
/// a previous run, and the hardcoded default was accepted by a human.
pub fn resolve(extracted: Option<f64>, prior: Option<f64>, default: f64, field: &str) -> ResolvedField {
    if let Some(value) = extracted {
        info!(field, value, "extracted");
        return ResolvedField::new(value, Provenance::Extracted);
    }
    if let Some(value) = prior {
        warn!(field, value, "extraction missed, carrying previous snapshot value");
        return ResolvedField::new(value, Provenance::CarriedFallback);
    }
    warn!(field, value = default, "extraction missed, using hardcoded default");
    ResolvedField::new(default, Provenance::HardcodedFallback)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracted_wins_over_everything() {
        let field = resolve(Some(5.0), Some(3.0), 1.0, "test/in");
        assert_eq!(field, ResolvedField::new(5.0, Provenance::Extracted));
    }

    #[test]
    fn prior_wins_over_default() {
        let field = resolve(None, Some(3.0), 1.0, "test/in");
        assert_eq!(field, ResolvedField::new(3.0, Provenance::CarriedFallback));
    }

    #[test]
    fn default_is_last_resort() {
        let field = resolve(None, None, 1.0, "test/in");
        assert_eq!(field, ResolvedField::new(1.0, Provenance::HardcodedFallback));
    }
}
