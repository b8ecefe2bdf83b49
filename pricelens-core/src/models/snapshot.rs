//! The persisted snapshot container.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::record::{ApiModelRecord, OfferingRecord, PlanRecord, Provenance};
use crate::error::CoreError;

// ============================================================================
// Exchange Rate
// ============================================================================

/// USD/JPY exchange rate with its own provenance.
///
/// The single-value instance of the fallback pattern: freshly fetched,
/// else carried from the previous snapshot, else a hardcoded default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// 1 USD in JPY.
    pub rate: f64,
    /// Rate date (`YYYY-MM-DD`), or `"fallback"` when not freshly fetched.
    pub date: String,
    /// How the rate was obtained.
    pub status: Provenance,
}

impl ExchangeRate {
    /// A freshly fetched rate.
    pub fn fetched(rate: f64, date: impl Into<String>) -> Self {
        Self {
            rate,
            date: date.into(),
            status: Provenance::Extracted,
        }
    }

    /// A rate falling back to a previously accepted or hardcoded value.
    pub fn fallback(rate: f64, status: Provenance) -> Self {
        Self {
            rate,
            date: "fallback".to_string(),
            status,
        }
    }
}

// ============================================================================
// Pricing Snapshot
// ============================================================================

/// The complete dataset written at the end of a run.
///
/// This is the only persisted entity. Record order is registry declaration
/// order; it is stable but not meaningful for correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    /// When this snapshot was generated.
    pub generated_at: DateTime<Utc>,
    /// USD/JPY rate used by the pricing page for currency display.
    pub exchange_rate: ExchangeRate,
    /// API models with per-token prices.
    pub api_models: Vec<ApiModelRecord>,
    /// Subscription plans with per-seat prices.
    pub plans: Vec<PlanRecord>,
}

impl PricingSnapshot {
    /// Creates a snapshot stamped with the current time.
    pub fn new(
        exchange_rate: ExchangeRate,
        api_models: Vec<ApiModelRecord>,
        plans: Vec<PlanRecord>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            exchange_rate,
            api_models,
            plans,
        }
    }

    /// Validates snapshot invariants.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidData` if any record identity
    /// (vendor + offering name) appears twice, or a price is negative
    /// or non-finite.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for record in &self.api_models {
            let key = record.key();
            if !seen.insert((key.vendor.clone(), key.name.clone())) {
                return Err(CoreError::InvalidData(format!(
                    "duplicate api model: {}/{}",
                    key.vendor, key.name
                )));
            }
            for (label, price) in [("price_in", record.price_in), ("price_out", record.price_out)] {
                if !price.is_finite() || price < 0.0 {
                    return Err(CoreError::InvalidData(format!(
                        "{}/{}: bad {label} {price}",
                        key.vendor, key.name
                    )));
                }
            }
        }
        let mut seen = HashSet::new();
        for record in &self.plans {
            let key = record.key();
            if !seen.insert((key.vendor.clone(), key.name.clone())) {
                return Err(CoreError::InvalidData(format!(
                    "duplicate plan: {}/{}",
                    key.vendor, key.name
                )));
            }
            if !record.monthly.is_finite() || record.monthly < 0.0 {
                return Err(CoreError::InvalidData(format!(
                    "{}/{}: bad monthly {}",
                    key.vendor, key.name, record.monthly
                )));
            }
        }
        Ok(())
    }

    /// Rounds all prices to 6 decimal places.
    ///
    /// Removes float artifacts introduced by unit conversion
    /// (0.034999999... → 0.035) before the snapshot is written.
    pub fn round_prices(&mut self) {
        for record in &mut self.api_models {
            record.price_in = round6(record.price_in);
            record.price_out = round6(record.price_out);
        }
        for record in &mut self.plans {
            record.monthly = round6(record.monthly);
            if let Some(annual) = record.annual {
                record.annual = Some(round6(annual));
            }
        }
    }

    /// Counts records at `extracted` status, for run summary logging.
    pub fn extracted_count(&self) -> usize {
        self.api_models
            .iter()
            .filter(|r| r.status == Provenance::Extracted)
            .count()
            + self
                .plans
                .iter()
                .filter(|r| r.status == Provenance::Extracted)
                .count()
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn model(provider: &str, name: &str) -> ApiModelRecord {
        ApiModelRecord {
            provider: provider.into(),
            name: name.into(),
            tag: String::new(),
            cls: String::new(),
            price_in: 1.0,
            price_out: 2.0,
            blurb_ja: String::new(),
            blurb_en: String::new(),
            status: Provenance::Extracted,
        }
    }

    #[test]
    fn duplicate_identity_rejected() {
        let rate = ExchangeRate::fetched(155.0, "2026-08-01");
        let snapshot = PricingSnapshot::new(
            rate,
            vec![model("Anthropic", "Claude Opus 4.6"), model("Anthropic", "Claude Opus 4.6")],
            vec![],
        );
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn same_name_different_vendor_is_fine() {
        let rate = ExchangeRate::fetched(155.0, "2026-08-01");
        let snapshot =
            PricingSnapshot::new(rate, vec![model("OpenAI", "Pro"), model("xAI", "Pro")], vec![]);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn round_prices_cleans_artifacts() {
        let rate = ExchangeRate::fetched(155.0, "2026-08-01");
        let mut m = model("AWS", "Amazon Nova Micro");
        m.price_in = 0.034_999_999_999_9;
        let mut snapshot = PricingSnapshot::new(rate, vec![m], vec![]);
        snapshot.round_prices();
        assert_eq!(snapshot.api_models[0].price_in, 0.035);
    }
}
