//! The generic source engine.
//!
//! One code path for every vendor: acquire content, extract per the
//! spec's rule tables, resolve each field through the fallback chain,
//! reconcile coupled fields, emit records. A fetch failure or extraction
//! miss only changes which tier the values resolve at — the record list a
//! source produces always covers all of its offerings.

use pricelens_core::{
    joint_status, reconcile, resolve, ApiModelRecord, CompiledRules, PlanRecord, Provenance,
    ValueClass,
};
use tracing::{info, warn};

use crate::context::SourceContext;
use crate::error::SourceError;
use crate::prior::PriorIndex;
use crate::spec::{ApiOfferingSpec, ApiSourceSpec, ContentSource, PlanSourceSpec};
use crate::structured;

// ============================================================================
// Content Acquisition
// ============================================================================

enum RawContent {
    Text(String),
    Doc(serde_json::Value),
    /// Fetch failed; every field resolves through the fallback chain.
    Unavailable,
}

async fn acquire(spec_label: &str, source: ContentSource, ctx: &SourceContext) -> RawContent {
    match source {
        ContentSource::RenderedPage { url, wait_hint } => {
            match ctx.page.fetch_rendered_text(url, wait_hint, ctx.page_timeout).await {
                Ok(text) => RawContent::Text(text),
                Err(e) => {
                    warn!(source = spec_label, url, error = %e, "page fetch failed");
                    RawContent::Unavailable
                }
            }
        }
        ContentSource::PricingApi { url } => {
            match ctx.json.fetch_json(url, ctx.api_timeout).await {
                Ok(doc) => RawContent::Doc(doc),
                Err(e) => {
                    warn!(source = spec_label, url, error = %e, "pricing API fetch failed");
                    RawContent::Unavailable
                }
            }
        }
    }
}

// ============================================================================
// API Model Sources
// ============================================================================

fn extract_pair(
    offering: &ApiOfferingSpec,
    content: &RawContent,
) -> Result<(Option<f64>, Option<f64>), SourceError> {
    match content {
        RawContent::Text(text) => {
            let input = if offering.input_rules.is_empty() {
                None
            } else {
                CompiledRules::compile(offering.input_rules)?.extract(text, ValueClass::TokenPrice)
            };
            let output = if offering.output_rules.is_empty() {
                None
            } else {
                CompiledRules::compile(offering.output_rules)?.extract(text, ValueClass::TokenPrice)
            };
            Ok((input, output))
        }
        RawContent::Doc(doc) => {
            if offering.api_keywords.is_empty() {
                return Ok((None, None));
            }
            let (input, output) = structured::extract_token_prices(doc, offering.api_keywords);
            // Structured values pass the same bounds gate as text matches.
            Ok((
                input.filter(|v| ValueClass::TokenPrice.accepts(*v)),
                output.filter(|v| ValueClass::TokenPrice.accepts(*v)),
            ))
        }
        RawContent::Unavailable => Ok((None, None)),
    }
}

/// Runs one API model source to completion.
///
/// # Errors
///
/// Only configuration defects (uncompilable rules) error out; registry
/// validation makes that unreachable in a correctly started process.
pub async fn run_api_source(
    spec: &ApiSourceSpec,
    ctx: &SourceContext,
    prior: &PriorIndex,
) -> Result<Vec<ApiModelRecord>, SourceError> {
    info!(source = spec.label, "scraping API model source");
    let content = acquire(spec.label, spec.source, ctx).await;

    let mut records = Vec::with_capacity(spec.offerings.len());
    for offering in spec.offerings {
        let (extracted_in, extracted_out) = extract_pair(offering, &content)?;
        let prior_pair = prior.api_prices(offering.provider, offering.name);

        let fields = reconcile(vec![
            resolve(
                extracted_in,
                prior_pair.map(|p| p.0),
                offering.default_in,
                &format!("{}/{}/in", spec.label, offering.name),
            ),
            resolve(
                extracted_out,
                prior_pair.map(|p| p.1),
                offering.default_out,
                &format!("{}/{}/out", spec.label, offering.name),
            ),
        ]);

        records.push(ApiModelRecord {
            provider: offering.provider.to_string(),
            name: offering.name.to_string(),
            tag: offering.tag.to_string(),
            cls: offering.cls.to_string(),
            price_in: fields[0].value,
            price_out: fields[1].value,
            blurb_ja: offering.blurb_ja.to_string(),
            blurb_en: offering.blurb_en.to_string(),
            status: joint_status(&fields),
        });
    }

    let extracted = records
        .iter()
        .filter(|r| r.status == Provenance::Extracted)
        .count();
    info!(source = spec.label, records = records.len(), extracted, "source done");
    Ok(records)
}

// ============================================================================
// Subscription Plan Sources
// ============================================================================

/// Runs one subscription plan source to completion.
///
/// # Errors
///
/// As [`run_api_source`].
pub async fn run_plan_source(
    spec: &PlanSourceSpec,
    ctx: &SourceContext,
    prior: &PriorIndex,
) -> Result<Vec<PlanRecord>, SourceError> {
    info!(source = spec.label, "scraping plan source");
    let content = acquire(
        spec.label,
        ContentSource::RenderedPage {
            url: spec.url,
            wait_hint: None,
        },
        ctx,
    )
    .await;

    let mut records = Vec::with_capacity(spec.offerings.len());
    for offering in spec.offerings {
        let extracted = match &content {
            RawContent::Text(text) if !offering.rules.is_empty() => {
                CompiledRules::compile(offering.rules)?.extract(text, ValueClass::SeatPrice)
            }
            _ => None,
        };

        // The monthly price is the only extracted field; the reconciled
        // group is a singleton and the annual figure stays metadata.
        let fields = reconcile(vec![resolve(
            extracted,
            prior.plan_monthly(offering.group, offering.name),
            offering.default_monthly,
            &format!("{}/{}/monthly", spec.label, offering.name),
        )]);

        records.push(PlanRecord {
            group: offering.group.to_string(),
            name: offering.name.to_string(),
            monthly: fields[0].value,
            annual: offering.annual,
            tag: offering.tag.to_string(),
            cls: offering.cls.to_string(),
            note_ja: offering.note_ja.to_string(),
            note_en: offering.note_en.to_string(),
            status: joint_status(&fields),
        });
    }

    let extracted = records
        .iter()
        .filter(|r| r.status == Provenance::Extracted)
        .count();
    info!(source = spec.label, records = records.len(), extracted, "source done");
    Ok(records)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pricelens_core::{ExchangeRate, PricingSnapshot};
    use pricelens_fetch::{FetchError, JsonFetcher, PageFetcher};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::spec::PlanOfferingSpec;

    struct FixturePage(&'static str);

    #[async_trait]
    impl PageFetcher for FixturePage {
        async fn fetch_rendered_text(
            &self,
            _url: &str,
            _wait_hint: Option<&str>,
            _timeout: Duration,
        ) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingPage;

    #[async_trait]
    impl PageFetcher for FailingPage {
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

    struct NoJson;

    #[async_trait]
    impl JsonFetcher for NoJson {
        async fn fetch_json(
            &self,
            _url: &str,
            _timeout: Duration,
        ) -> Result<serde_json::Value, FetchError> {
            Err(FetchError::InvalidResponse("no fixture".into()))
        }
    }

    fn ctx(page: impl PageFetcher + 'static) -> SourceContext {
        SourceContext::with_fetchers(Arc::new(page), Arc::new(NoJson))
    }

    static MODEL_X_SOURCE: ApiSourceSpec = ApiSourceSpec {
        label: "Example",
        source: ContentSource::RenderedPage {
            url: "https://example.com/pricing",
            wait_hint: None,
        },
        offerings: &[ApiOfferingSpec {
            provider: "Example",
            name: "Model X",
            tag: "Flagship",
            cls: "tag-flag",
            blurb_ja: "",
            blurb_en: "",
            default_in: 1.0,
            default_out: 5.0,
            input_rules: &[r"model x[^$]*?\$([\d.]+)\s*/\s*1M input"],
            output_rules: &[
                r"model x[^$]*?\$[\d.]+[^$]*?\$([\d.]+)\s*/\s*1M output",
                r"model x[^$]*?\$([\d.]+)\s*/\s*1M output",
            ],
            api_keywords: &[],
        }],
    };

    #[tokio::test]
    async fn extracts_both_fields_from_page_text() {
        let ctx = ctx(FixturePage(
            "Model X pricing: $3.00 / 1M input and $15.00 / 1M output tokens.",
        ));
        let prior = PriorIndex::from_snapshot(None);
        let records = run_api_source(&MODEL_X_SOURCE, &ctx, &prior).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price_in, 3.0);
        assert_eq!(records[0].price_out, 15.0);
        assert_eq!(records[0].status, Provenance::Extracted);
    }

    #[tokio::test]
    async fn fetch_failure_resolves_to_hardcoded_defaults() {
        let ctx = ctx(FailingPage);
        let prior = PriorIndex::from_snapshot(None);
        let records = run_api_source(&MODEL_X_SOURCE, &ctx, &prior).await.unwrap();

        assert_eq!(records[0].price_in, 1.0);
        assert_eq!(records[0].price_out, 5.0);
        assert_eq!(records[0].status, Provenance::HardcodedFallback);
    }

    #[tokio::test]
    async fn fetch_failure_prefers_previous_snapshot_over_defaults() {
        let previous = PricingSnapshot::new(
            ExchangeRate::fetched(155.0, "2026-08-01"),
            vec![ApiModelRecord {
                provider: "Example".into(),
                name: "Model X".into(),
                tag: String::new(),
                cls: String::new(),
                price_in: 2.5,
                price_out: 12.0,
                blurb_ja: String::new(),
                blurb_en: String::new(),
                status: Provenance::Extracted,
            }],
            vec![],
        );
        let ctx = ctx(FailingPage);
        let prior = PriorIndex::from_snapshot(Some(&previous));
        let records = run_api_source(&MODEL_X_SOURCE, &ctx, &prior).await.unwrap();

        assert_eq!(records[0].price_in, 2.5);
        assert_eq!(records[0].price_out, 12.0);
        assert_eq!(records[0].status, Provenance::CarriedFallback);
    }

    #[tokio::test]
    async fn partial_extraction_demotes_the_pair() {
        // Output price present, input phrasing changed.
        let ctx = ctx(FixturePage("Model X: $15.00 / 1M output tokens only."));
        let prior = PriorIndex::from_snapshot(None);
        let records = run_api_source(&MODEL_X_SOURCE, &ctx, &prior).await.unwrap();

        assert_eq!(records[0].status, Provenance::HardcodedFallback);
        // The extracted output value is still used.
        assert_eq!(records[0].price_out, 15.0);
        assert_eq!(records[0].price_in, 1.0);
    }

    static PLAN_SOURCE: PlanSourceSpec = PlanSourceSpec {
        label: "ExampleTool",
        url: "https://example.com/plans",
        offerings: &[
            PlanOfferingSpec {
                group: "ExampleTool",
                name: "Free",
                default_monthly: 0.0,
                annual: None,
                tag: "Free",
                cls: "tag-mini",
                note_ja: "",
                note_en: "",
                rules: &[],
            },
            PlanOfferingSpec {
                group: "ExampleTool",
                name: "Pro",
                default_monthly: 10.0,
                annual: Some(100.0),
                tag: "Individual",
                cls: "tag-bal",
                note_ja: "",
                note_en: "",
                rules: &[r"pro[^$\n]*?\$([\d.]+)\s*/\s*month"],
            },
        ],
    };

    #[tokio::test]
    async fn plan_source_extracts_monthly_and_keeps_annual_metadata() {
        let ctx = ctx(FixturePage("Plans: Pro $12 / month, billed monthly."));
        let prior = PriorIndex::from_snapshot(None);
        let records = run_plan_source(&PLAN_SOURCE, &ctx, &prior).await.unwrap();

        assert_eq!(records.len(), 2);
        // Free tier has no rules and resolves through the chain.
        assert_eq!(records[0].status, Provenance::HardcodedFallback);
        assert_eq!(records[0].monthly, 0.0);
        // Pro extracted fresh; annual stays from the table.
        assert_eq!(records[1].monthly, 12.0);
        assert_eq!(records[1].annual, Some(100.0));
        assert_eq!(records[1].status, Provenance::Extracted);
    }
}
