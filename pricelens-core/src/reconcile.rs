//! Paired-field reconciliation.
//!
//! Coupled fields (input/output token prices) are only meaningful
//! together. A half-extracted pair under page drift is as untrustworthy as
//! a fully missed one — a partial match is strong evidence the rest of the
//! page structure changed too — so one miss demotes the whole group.

use crate::models::Provenance;
use crate::resolve::ResolvedField;

/// Reconciles a coupled field group.
///
/// If every field resolved at `extracted`, all keep that status. Otherwise
/// every field is demoted to the worst status present in the group, even
/// fields whose own value was independently extracted. Values are never
/// changed, only statuses. An empty or single-field group passes through.
pub fn reconcile(fields: Vec<ResolvedField>) -> Vec<ResolvedField> {
    let worst = joint_status(&fields);
    fields
        .into_iter()
        .map(|f| ResolvedField::new(f.value, worst))
        .collect()
}

/// Returns the worst status present in the group.
///
/// This is the single status a record reports for its reconciled fields.
/// An empty group is `extracted` by convention (nothing failed).
pub fn joint_status(fields: &[ResolvedField]) -> Provenance {
    fields
        .iter()
        .map(|f| f.status)
        .fold(Provenance::Extracted, Provenance::worst)
}

// ============================================================================
// Tests
// ============================================================================
