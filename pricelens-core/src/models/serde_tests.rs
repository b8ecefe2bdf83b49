//! Serde round-trip tests for the persisted model types.
//!
//! The snapshot must read back byte-for-byte compatible with what was
//! written, so field names and status spellings are pinned here.

use serde_json;

use crate::{ApiModelRecord, ExchangeRate, PlanRecord, PricingSnapshot, Provenance};

// ============================================================================
// Provenance
// ============================================================================

#[test]
fn provenance_serializes_snake_case() {
    let cases = [
        (Provenance::Extracted, r#""extracted""#),
        (Provenance::Manual, r#""manual""#),
        (Provenance::CarriedFallback, r#""carried_fallback""#),
        (Provenance::HardcodedFallback, r#""hardcoded_fallback""#),
    ];
    for (status, json) in cases {
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
        let parsed: Provenance = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn provenance_rejects_unknown_status() {
    let result: Result<Provenance, _> = serde_json::from_str(r#""guessed""#);
    assert!(result.is_err());
}

// ============================================================================
// Records
// ============================================================================

fn sample_model() -> ApiModelRecord {
    ApiModelRecord {
        provider: "Anthropic".into(),
        name: "Claude Sonnet 4.6".into(),
        tag: "Flagship".into(),
        cls: "tag-flag".into(),
        price_in: 3.0,
        price_out: 15.0,
        blurb_ja: "バランス最適 / 200K".into(),
        blurb_en: "Optimal balance / 200K ctx".into(),
        status: Provenance::Extracted,
    }
}

fn sample_plan() -> PlanRecord {
    PlanRecord {
        group: "Claude Code".into(),
        name: "Pro".into(),
        monthly: 20.0,
        annual: Some(17.0),
        tag: "Individual".into(),
        cls: "tag-bal".into(),
        note_ja: "~45 msg/5h".into(),
        note_en: "~45 msg/5h".into(),
        status: Provenance::HardcodedFallback,
    }
}

#[test]
fn api_model_roundtrip() {
    let record = sample_model();
    let json = serde_json::to_string(&record).unwrap();
    let parsed: ApiModelRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn plan_roundtrip_with_and_without_annual() {
    let with = sample_plan();
    let json = serde_json::to_string(&with).unwrap();
    assert_eq!(serde_json::from_str::<PlanRecord>(&json).unwrap(), with);

    let mut without = sample_plan();
    without.annual = None;
    let json = serde_json::to_string(&without).unwrap();
    assert!(json.contains(r#""annual":null"#));
    assert_eq!(serde_json::from_str::<PlanRecord>(&json).unwrap(), without);
}

// ============================================================================
// Snapshot
// ============================================================================

#[test]
fn snapshot_roundtrip_is_byte_stable() {
    let snapshot = PricingSnapshot::new(
        ExchangeRate::fetched(155.22, "2026-08-01"),
        vec![sample_model()],
        vec![sample_plan()],
    );
    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    let parsed: PricingSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);

    // Re-serializing the parsed snapshot reproduces the exact bytes.
    let json_again = serde_json::to_string_pretty(&parsed).unwrap();
    assert_eq!(json, json_again);
}

#[test]
fn exchange_rate_fallback_shape() {
    let rate = ExchangeRate::fallback(155.0, Provenance::CarriedFallback);
    let json = serde_json::to_string(&rate).unwrap();
    assert!(json.contains(r#""date":"fallback""#));
    assert!(json.contains(r#""status":"carried_fallback""#));
}
