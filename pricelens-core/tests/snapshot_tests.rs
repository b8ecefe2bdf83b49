//! Integration tests for the snapshot pipeline: resolve → reconcile →
//! record → merge, exercised through the public API only.

use pricelens_core::{
    joint_status, merge_records, reconcile, resolve, ApiModelRecord, CompiledRules, ExchangeRate,
    PricingSnapshot, Provenance, ValueClass,
};

fn record_from(fields: &[pricelens_core::ResolvedField], provider: &str, name: &str) -> ApiModelRecord {
    ApiModelRecord {
        provider: provider.into(),
        name: name.into(),
        tag: String::new(),
        cls: String::new(),
        price_in: fields[0].value,
        price_out: fields[1].value,
        blurb_ja: String::new(),
        blurb_en: String::new(),
        status: joint_status(fields),
    }
}

#[test]
fn end_to_end_extraction_to_record() {
    let text = "Model X pricing. Input: $3.00 / 1M tokens. Output: $15.00 / 1M tokens.";
    let input_rules =
        CompiledRules::compile(&[r"model x[^$]*?input[^$]*?\$([\d.]+)"]).unwrap();
    let output_rules =
        CompiledRules::compile(&[r"model x[^$]*?output[^$]*?\$([\d.]+)"]).unwrap();

    let input = input_rules.extract(text, ValueClass::TokenPrice);
    let output = output_rules.extract(text, ValueClass::TokenPrice);

    let fields = reconcile(vec![
        resolve(input, None, 1.0, "ModelX/in"),
        resolve(output, None, 5.0, "ModelX/out"),
    ]);
    let record = record_from(&fields, "Example", "Model X");

    assert_eq!(record.price_in, 3.0);
    assert_eq!(record.price_out, 15.0);
    assert_eq!(record.status, Provenance::Extracted);
}

#[test]
fn half_extracted_pair_reports_fallback_on_both_fields() {
    let text = "Model X pricing. Input: $3.00 / 1M tokens. (output price removed in redesign)";
    let input_rules =
        CompiledRules::compile(&[r"model x[^$]*?input[^$]*?\$([\d.]+)"]).unwrap();
    let output_rules =
        CompiledRules::compile(&[r"model x[^$]*?output[^$]*?\$([\d.]+)"]).unwrap();

    let input = input_rules.extract(text, ValueClass::TokenPrice);
    let output = output_rules.extract(text, ValueClass::TokenPrice);
    assert_eq!(input, Some(3.0));
    assert_eq!(output, None);

    let fields = reconcile(vec![
        resolve(input, Some(2.5), 1.0, "ModelX/in"),
        resolve(output, Some(12.0), 5.0, "ModelX/out"),
    ]);
    let record = record_from(&fields, "Example", "Model X");

    // The extracted input value survives, but both fields report the
    // fallback status of the missed output.
    assert_eq!(record.price_in, 3.0);
    assert_eq!(record.price_out, 12.0);
    assert_eq!(record.status, Provenance::CarriedFallback);
}

#[test]
fn merged_snapshot_is_stable_modulo_timestamp() {
    let fields = vec![
        resolve(Some(3.0), None, 1.0, "a/in"),
        resolve(Some(15.0), None, 5.0, "a/out"),
    ];
    let fresh = vec![record_from(&reconcile(fields), "Example", "Model X")];

    let merged_once = merge_records(fresh.clone(), Vec::new());
    let merged_twice = merge_records(fresh, Vec::new());

    let mut a = PricingSnapshot::new(
        ExchangeRate::fetched(155.0, "2026-08-01"),
        merged_once,
        vec![],
    );
    let mut b = PricingSnapshot::new(
        ExchangeRate::fetched(155.0, "2026-08-01"),
        merged_twice,
        vec![],
    );
    // Normalize the only field allowed to differ.
    b.generated_at = a.generated_at;

    a.round_prices();
    b.round_prices();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
