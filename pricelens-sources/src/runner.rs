//! Isolated source execution.
//!
//! Every source runs in its own task behind a bulkhead: a panic or
//! unexpected error in one vendor's source is caught at the join
//! boundary, logged with the source's identity, and converted into "this
//! source contributed zero fresh records". One vendor redesigning their
//! page must never prevent the others' prices from updating.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use pricelens_core::{ApiModelRecord, PlanRecord};

use crate::context::SourceContext;
use crate::engine::{run_api_source, run_plan_source};
use crate::error::SourceError;
use crate::prior::PriorIndex;
use crate::registry::SourceRegistry;

// ============================================================================
// Run Outcome
// ============================================================================

/// A source that contributed zero fresh records.
#[derive(Debug, Clone)]
pub struct AdapterFailure {
    /// Source label.
    pub source: String,
    /// What went wrong.
    pub error: String,
}

/// Aggregated results of one full run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Fresh API model records, in registry order.
    pub api_models: Vec<ApiModelRecord>,
    /// Fresh plan records, in registry order.
    pub plans: Vec<PlanRecord>,
    /// Sources that crashed and contributed nothing.
    pub failures: Vec<AdapterFailure>,
}

// ============================================================================
// Bulkhead
// ============================================================================

/// Joins one source task, converting panics and errors into failures.
async fn join_isolated<T>(
    label: &str,
    handle: JoinHandle<Result<Vec<T>, SourceError>>,
) -> Result<Vec<T>, AdapterFailure> {
    match handle.await {
        Ok(Ok(records)) => Ok(records),
        Ok(Err(e)) => {
            error!(source = label, error = %e, "source failed");
            Err(AdapterFailure {
                source: label.to_string(),
                error: e.to_string(),
            })
        }
        Err(join_err) => {
            let error = if join_err.is_panic() {
                "source task panicked".to_string()
            } else {
                join_err.to_string()
            };
            error!(source = label, error, "source crashed");
            Err(AdapterFailure {
                source: label.to_string(),
                error,
            })
        }
    }
}

// ============================================================================
// Run All
// ============================================================================

/// Executes every registered source concurrently and aggregates results.
///
/// Tasks are spawned up front and joined in registry declaration order,
/// giving parallel fetches with a deterministic, append-only aggregation.
pub async fn run_all(ctx: &SourceContext, prior: &Arc<PriorIndex>) -> RunOutcome {
    info!(sources = SourceRegistry::source_count(), "starting scrape run");

    let api_handles: Vec<_> = SourceRegistry::api_sources()
        .iter()
        .map(|spec| {
            let ctx = ctx.clone();
            let prior = Arc::clone(prior);
            (
                spec.label,
                tokio::spawn(async move { run_api_source(spec, &ctx, &prior).await }),
            )
        })
        .collect();
    let plan_handles: Vec<_> = SourceRegistry::plan_sources()
        .iter()
        .map(|spec| {
            let ctx = ctx.clone();
            let prior = Arc::clone(prior);
            (
                spec.label,
                tokio::spawn(async move { run_plan_source(spec, &ctx, &prior).await }),
            )
        })
        .collect();

    let mut outcome = RunOutcome::default();
    for (label, handle) in api_handles {
        match join_isolated(label, handle).await {
            Ok(records) => outcome.api_models.extend(records),
            Err(failure) => outcome.failures.push(failure),
        }
    }
    for (label, handle) in plan_handles {
        match join_isolated(label, handle).await {
            Ok(records) => outcome.plans.extend(records),
            Err(failure) => outcome.failures.push(failure),
        }
    }

    info!(
        api_models = outcome.api_models.len(),
        plans = outcome.plans.len(),
        failures = outcome.failures.len(),
        "scrape run finished"
    );
    outcome
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pricelens_core::Provenance;
    use pricelens_fetch::{FetchError, JsonFetcher, PageFetcher};
    use std::time::Duration;

    #[tokio::test]
    async fn panic_in_one_task_does_not_poison_siblings() {
        let good: JoinHandle<Result<Vec<u32>, SourceError>> =
            tokio::spawn(async { Ok(vec![1, 2, 3]) });
        let bad: JoinHandle<Result<Vec<u32>, SourceError>> =
            tokio::spawn(async { panic!("vendor page exploded") });
        let also_good: JoinHandle<Result<Vec<u32>, SourceError>> =
            tokio::spawn(async { Ok(vec![4]) });

        let a = join_isolated("A", good).await;
        let b = join_isolated("B", bad).await;
        let c = join_isolated("C", also_good).await;

        assert_eq!(a.unwrap(), vec![1, 2, 3]);
        assert_eq!(c.unwrap(), vec![4]);
        let failure = b.unwrap_err();
        assert_eq!(failure.source, "B");
        assert!(failure.error.contains("panicked"));
    }

    #[tokio::test]
    async fn error_result_becomes_failure_entry() {
        let handle: JoinHandle<Result<Vec<u32>, SourceError>> =
            tokio::spawn(async { Err(SourceError::Crashed("boom".into())) });
        let failure = join_isolated("X", handle).await.unwrap_err();
        assert!(failure.error.contains("boom"));
    }

    struct Offline;

    #[async_trait]
    impl PageFetcher for Offline {
        async fn fetch_rendered_text(
            &self,
            url: &str,
            _wait_hint: Option<&str>,
            _timeout: Duration,
        ) -> Result<String, FetchError> {
            Err(FetchError::Status {
                status: 503,
                url: url.to_string(),
            })
        }
    }

    #[async_trait]
    impl JsonFetcher for Offline {
        async fn fetch_json(
            &self,
            _url: &str,
            _timeout: Duration,
        ) -> Result<serde_json::Value, FetchError> {
            Err(FetchError::InvalidResponse("offline".into()))
        }
    }

    #[tokio::test]
    async fn full_run_with_every_fetch_failing_still_covers_the_registry() {
        let ctx = SourceContext::with_fetchers(Arc::new(Offline), Arc::new(Offline));
        let prior = Arc::new(PriorIndex::from_snapshot(None));
        let outcome = run_all(&ctx, &prior).await;

        // Degraded freshness, not a failed run: every offering resolves
        // through its hardcoded default.
        assert!(outcome.failures.is_empty());
        let total = outcome.api_models.len() + outcome.plans.len();
        assert_eq!(total, SourceRegistry::offering_count());
        assert!(outcome
            .api_models
            .iter()
            .all(|r| r.status == Provenance::HardcodedFallback));
        assert!(outcome
            .plans
            .iter()
            .all(|r| r.status == Provenance::HardcodedFallback));
    }
}
