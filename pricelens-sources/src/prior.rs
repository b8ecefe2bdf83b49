//! Previous-snapshot value lookup.
//!
//! The middle tier of the fallback chain. Built once per run from the
//! loaded snapshot; sources only ever read from it.

use std::collections::HashMap;

use pricelens_core::{ExchangeRate, PricingSnapshot};

/// Index of previous-snapshot values keyed by record identity.
#[derive(Debug, Default)]
pub struct PriorIndex {
    api: HashMap<(String, String), (f64, f64)>,
    plans: HashMap<(String, String), f64>,
    exchange: Option<ExchangeRate>,
}

impl PriorIndex {
    /// Builds the index from an optional previous snapshot.
    pub fn from_snapshot(snapshot: Option<&PricingSnapshot>) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::default();
        };
        let api = snapshot
            .api_models
            .iter()
            .map(|r| {
                (
                    (r.provider.clone(), r.name.clone()),
                    (r.price_in, r.price_out),
                )
            })
            .collect();
        let plans = snapshot
            .plans
            .iter()
            .map(|r| ((r.group.clone(), r.name.clone()), r.monthly))
            .collect();
        Self {
            api,
            plans,
            exchange: Some(snapshot.exchange_rate.clone()),
        }
    }

    /// Previous (input, output) prices for an API model, if present.
    pub fn api_prices(&self, provider: &str, name: &str) -> Option<(f64, f64)> {
        self.api
            .get(&(provider.to_string(), name.to_string()))
            .copied()
    }

    /// Previous monthly price for a plan, if present.
    pub fn plan_monthly(&self, group: &str, name: &str) -> Option<f64> {
        self.plans
            .get(&(group.to_string(), name.to_string()))
            .copied()
    }

    /// Previous exchange rate, if a snapshot existed.
    pub fn exchange(&self) -> Option<&ExchangeRate> {
        self.exchange.as_ref()
    }
}

// ============================================================================
// Tests
// ============================================================================
