//! Snapshot merging.
//!
//! Combines current-run records with carried-over previous-snapshot
//! records into one dataset. A source that crashed or was skipped
//! contributes zero fresh records; its offerings survive through the
//! previous snapshot rather than vanishing from the output.

use std::collections::HashSet;

use tracing::debug;

use crate::models::OfferingRecord;

/// Merges fresh records with a previous snapshot's records.
///
/// Fresh records win by identity (vendor + offering name) and keep their
/// order. Previous records whose identity has no fresh counterpart are
/// appended in their original order, re-tagged as `carried_fallback`
/// unless already at a fallback tier. Offerings absent from both inputs
/// are omitted — the merger never synthesizes records.
pub fn merge_records<T: OfferingRecord>(fresh: Vec<T>, previous: Vec<T>) -> Vec<T> {
    let fresh_keys: HashSet<_> = fresh.iter().map(OfferingRecord::key).collect();

    let mut merged = fresh;
    for record in previous {
        if fresh_keys.contains(&record.key()) {
            continue;
        }
        let key = record.key();
        debug!(vendor = %key.vendor, name = %key.name, "carrying record from previous snapshot");
        merged.push(record.into_carried());
    }
    merged
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlanRecord, Provenance};

    fn plan(group: &str, name: &str, monthly: f64, status: Provenance) -> PlanRecord {
        PlanRecord {
            group: group.into(),
            name: name.into(),
            monthly,
            annual: None,
            tag: String::new(),
            cls: String::new(),
            note_ja: String::new(),
            note_en: String::new(),
            status,
        }
    }

    #[test]
    fn fresh_record_wins_by_identity() {
        let fresh = vec![plan("Cursor", "Pro", 20.0, Provenance::Extracted)];
        let previous = vec![plan("Cursor", "Pro", 16.0, Provenance::Extracted)];
        let merged = merge_records(fresh, previous);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].monthly, 20.0);
        assert_eq!(merged[0].status, Provenance::Extracted);
    }

    #[test]
    fn missing_offering_is_carried_and_demoted() {
        let fresh = vec![plan("Cursor", "Pro", 20.0, Provenance::Extracted)];
        let previous = vec![
            plan("Cursor", "Pro", 16.0, Provenance::Extracted),
            plan("Windsurf", "Pro", 15.0, Provenance::Extracted),
        ];
        let merged = merge_records(fresh, previous);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].group, "Windsurf");
        assert_eq!(merged[1].monthly, 15.0);
        assert_eq!(merged[1].status, Provenance::CarriedFallback);
    }

    #[test]
    fn carried_record_keeps_deeper_fallback_tier() {
        let previous = vec![plan("Windsurf", "Pro", 15.0, Provenance::HardcodedFallback)];
        let merged = merge_records(Vec::new(), previous);
        assert_eq!(merged[0].status, Provenance::HardcodedFallback);
    }

    #[test]
    fn absent_from_both_is_omitted() {
        let merged: Vec<PlanRecord> = merge_records(Vec::new(), Vec::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_is_idempotent_without_previous() {
        let fresh = vec![
            plan("Cursor", "Pro", 20.0, Provenance::Extracted),
            plan("Windsurf", "Pro", 15.0, Provenance::HardcodedFallback),
        ];
        let once = merge_records(fresh.clone(), Vec::new());
        let twice = merge_records(once.clone(), Vec::new());
        assert_eq!(once, twice);
    }
}
