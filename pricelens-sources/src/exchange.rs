//! USD/JPY exchange rate.
//!
//! Frankfurter (<https://www.frankfurter.app>) serves ECB reference rates
//! without an API key. This is the single-value instance of the fallback
//! chain: fetched rate, else the previous snapshot's rate, else a
//! hardcoded default.

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use pricelens_core::{ExchangeRate, Provenance, ValueClass};

use crate::context::SourceContext;
use crate::prior::PriorIndex;

const FRANKFURTER_URL: &str = "https://api.frankfurter.app/latest?from=USD&to=JPY";

/// Last-resort rate when no snapshot exists and the API is unreachable.
const DEFAULT_RATE: f64 = 155.0;

/// Fetches the current USD/JPY rate, falling back on failure.
///
/// Never fails; the worst case is a hardcoded rate with a `fallback` date
/// marker, which the pricing page renders as-is.
pub async fn fetch_usd_jpy(ctx: &SourceContext, prior: &PriorIndex) -> ExchangeRate {
    match ctx.json.fetch_json(FRANKFURTER_URL, ctx.api_timeout).await {
        Ok(doc) => {
            // {"amount": 1.0, "base": "USD", "date": "2026-08-01", "rates": {"JPY": 155.22}}
            let rate = doc
                .get("rates")
                .and_then(|r| r.get("JPY"))
                .and_then(Value::as_f64);
            match rate {
                Some(rate) if ValueClass::ExchangeRate.accepts(rate) => {
                    let date = doc
                        .get("date")
                        .and_then(Value::as_str)
                        .map_or_else(
                            || Utc::now().format("%Y-%m-%d").to_string(),
                            ToString::to_string,
                        );
                    info!(rate, date, "USD/JPY rate fetched");
                    return ExchangeRate::fetched(rate, date);
                }
                Some(rate) => warn!(rate, "exchange rate outside plausible band"),
                None => warn!("exchange rate missing from response"),
            }
        }
        Err(e) => warn!(error = %e, "exchange rate fetch failed"),
    }

    match prior.exchange() {
        Some(previous) => {
            warn!(rate = previous.rate, "carrying previous exchange rate");
            ExchangeRate::fallback(previous.rate, Provenance::CarriedFallback)
        }
        None => {
            warn!(rate = DEFAULT_RATE, "using hardcoded exchange rate");
            ExchangeRate::fallback(DEFAULT_RATE, Provenance::HardcodedFallback)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pricelens_core::PricingSnapshot;
    use pricelens_fetch::{FetchError, JsonFetcher, PageFetcher};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    struct NoPage;

    #[async_trait]
    impl PageFetcher for NoPage {
        async fn fetch_rendered_text(
            &self,
            _url: &str,
            _wait_hint: Option<&str>,
            _timeout: Duration,
        ) -> Result<String, FetchError> {
            Err(FetchError::InvalidResponse("no fixture".into()))
        }
    }

    struct FixtureJson(Value);

    #[async_trait]
    impl JsonFetcher for FixtureJson {
        async fn fetch_json(
            &self,
            _url: &str,
            _timeout: Duration,
        ) -> Result<Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingJson;

    #[async_trait]
    impl JsonFetcher for FailingJson {
        async fn fetch_json(
            &self,
            _url: &str,
            _timeout: Duration,
        ) -> Result<Value, FetchError> {
            Err(FetchError::Timeout(15))
        }
    }

    fn ctx(json: impl JsonFetcher + 'static) -> SourceContext {
        SourceContext::with_fetchers(Arc::new(NoPage), Arc::new(json))
    }

    #[tokio::test]
    async fn fetched_rate_with_date() {
        let ctx = ctx(FixtureJson(json!({
            "amount": 1.0, "base": "USD", "date": "2026-08-01",
            "rates": {"JPY": 155.22}
        })));
        let prior = PriorIndex::from_snapshot(None);
        let rate = fetch_usd_jpy(&ctx, &prior).await;
        assert_eq!(rate.rate, 155.22);
        assert_eq!(rate.date, "2026-08-01");
        assert_eq!(rate.status, Provenance::Extracted);
    }

    #[tokio::test]
    async fn failure_carries_previous_rate() {
        let previous = PricingSnapshot::new(
            ExchangeRate::fetched(154.8, "2026-07-31"),
            vec![],
            vec![],
        );
        let ctx = ctx(FailingJson);
        let prior = PriorIndex::from_snapshot(Some(&previous));
        let rate = fetch_usd_jpy(&ctx, &prior).await;
        assert_eq!(rate.rate, 154.8);
        assert_eq!(rate.date, "fallback");
        assert_eq!(rate.status, Provenance::CarriedFallback);
    }

    #[tokio::test]
    async fn failure_without_snapshot_uses_default() {
        let ctx = ctx(FailingJson);
        let prior = PriorIndex::from_snapshot(None);
        let rate = fetch_usd_jpy(&ctx, &prior).await;
        assert_eq!(rate.rate, DEFAULT_RATE);
        assert_eq!(rate.status, Provenance::HardcodedFallback);
    }

    #[tokio::test]
    async fn implausible_rate_is_rejected() {
        // A broken response claiming 1 USD = 1.5 JPY must not be trusted.
        let ctx = ctx(FixtureJson(json!({"date": "2026-08-01", "rates": {"JPY": 1.5}})));
        let prior = PriorIndex::from_snapshot(None);
        let rate = fetch_usd_jpy(&ctx, &prior).await;
        assert_eq!(rate.rate, DEFAULT_RATE);
        assert_eq!(rate.status, Provenance::HardcodedFallback);
    }
}
