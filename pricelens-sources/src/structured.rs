//! Token-price lookup in structured pricing documents.
//!
//! Written against the AWS Pricing API document shape (`products` keyed by
//! SKU, `terms.OnDemand` price dimensions), which is the only structured
//! source today. The document has no schema guarantee; everything here is
//! best-effort and a miss is a normal `None`.

use serde_json::Value;
use tracing::trace;

// ============================================================================
// Candidate
// ============================================================================

/// Usage-type qualifiers that mark non-standard pricing tiers.
const EXCLUDED_QUALIFIERS: &[&str] = &[
    "batch",
    "flex",
    "priority",
    "custom-model",
    "latency-optimized",
    "cache",
    "storage",
    "throughput",
    "training",
];

#[derive(Debug)]
struct Candidate {
    price_per_million: f64,
    is_input: bool,
    /// 0 for us-east-1 rows, 1 otherwise.
    region_rank: u8,
    /// Dash count in the usage type; fewer dashes = fewer qualifiers.
    qualifier_count: usize,
    sku: String,
}

// ============================================================================
// Extraction
// ============================================================================

/// Finds (input, output) USD-per-1M-token prices for the model matching
/// `keywords`.
///
/// Candidate rows are standard on-demand token dimensions only (usage type
/// ending in `-input-tokens`/`-output-tokens`, none of the excluded tier
/// qualifiers, non-zero USD price). Among candidates the tie-break is
/// deterministic: prefer us-east-1, then the fewest usage-type qualifiers,
/// then lexicographically smallest SKU.
pub(crate) fn extract_token_prices(doc: &Value, keywords: &[&str]) -> (Option<f64>, Option<f64>) {
    let mut candidates = Vec::new();

    let products = doc.get("products").and_then(Value::as_object);
    let terms = doc
        .get("terms")
        .and_then(|t| t.get("OnDemand"))
        .and_then(Value::as_object);
    let (Some(products), Some(terms)) = (products, terms) else {
        return (None, None);
    };

    for (sku, product) in products {
        let attrs = product.get("attributes").and_then(Value::as_object);
        let Some(attrs) = attrs else { continue };

        let model_desc = format!(
            "{} {}",
            attrs.get("modelId").and_then(Value::as_str).unwrap_or(""),
            attrs.get("model").and_then(Value::as_str).unwrap_or("")
        )
        .to_lowercase();
        if !keywords.iter().any(|kw| model_desc.contains(&kw.to_lowercase())) {
            continue;
        }

        let usage_type = attrs
            .get("usagetype")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_lowercase();
        let is_input = usage_type.ends_with("-input-tokens");
        let is_output = usage_type.ends_with("-output-tokens");
        if !is_input && !is_output {
            continue;
        }
        if EXCLUDED_QUALIFIERS.iter().any(|q| usage_type.contains(q)) {
            continue;
        }

        let Some(sku_terms) = terms.get(sku).and_then(Value::as_object) else {
            continue;
        };
        for term in sku_terms.values() {
            let Some(dimensions) = term.get("priceDimensions").and_then(Value::as_object) else {
                continue;
            };
            for dimension in dimensions.values() {
                let usd = dimension
                    .get("pricePerUnit")
                    .and_then(|p| p.get("USD"))
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(0.0);
                if usd == 0.0 {
                    continue;
                }
                let description = dimension
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_lowercase();
                // Bedrock token dimensions are quoted per 1K tokens; a
                // per-token row has no unit marker in its description.
                let multiplier = if description.contains("1k") { 1_000.0 } else { 1_000_000.0 };

                candidates.push(Candidate {
                    price_per_million: usd * multiplier,
                    is_input,
                    region_rank: u8::from(!usage_type.contains("use1")),
                    qualifier_count: usage_type.matches('-').count(),
                    sku: sku.clone(),
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        (a.region_rank, a.qualifier_count, &a.sku).cmp(&(b.region_rank, b.qualifier_count, &b.sku))
    });
    trace!(candidates = candidates.len(), "structured price candidates");

    let input = candidates
        .iter()
        .find(|c| c.is_input)
        .map(|c| c.price_per_million);
    let output = candidates
        .iter()
        .find(|c| !c.is_input)
        .map(|c| c.price_per_million);
    (input, output)
}

// ============================================================================
// Tests
// ============================================================================
