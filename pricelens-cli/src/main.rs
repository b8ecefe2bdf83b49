// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! PriceLens CLI - regenerate the pricing snapshot.
//!
//! # Examples
//!
//! ```bash
//! # Scrape all sources and write ./pricing.json
//! pricelens
//!
//! # Write somewhere else
//! pricelens --output web/src/data/pricing.json
//!
//! # Keep existing prices, refresh only the exchange rate
//! pricelens --no-scrape
//!
//! # Show per-field resolution detail
//! pricelens --verbose
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pricelens_core::{merge_records, ApiModelRecord, PlanRecord, PricingSnapshot};
use pricelens_sources::{fetch_usd_jpy, run_all, PriorIndex, SourceContext, SourceRegistry};
use pricelens_store::{default_output_path, load_snapshot, save_snapshot};

// ============================================================================
// CLI Definition
// ============================================================================

/// PriceLens CLI - scraped LLM pricing snapshots.
#[derive(Parser)]
#[command(name = "pricelens")]
#[command(about = "Regenerate the LLM pricing snapshot")]
#[command(long_about = r#"
PriceLens scrapes vendor pricing pages and maintains pricing.json.

API providers:
  • Anthropic, OpenAI, Google AI / Vertex AI, AWS Bedrock, DeepSeek, xAI

Coding tools:
  • GitHub Copilot, Cursor, Windsurf, Claude Code,
    JetBrains AI / Junie, OpenAI Codex, Google One AI, Antigravity

A vendor page that fails to fetch or parse degrades that vendor's rows to
a fallback tier; it never fails the run. Exit code is 0 for any completed
run - only an unwritable snapshot is fatal.
"#)]
#[command(version)]
#[command(author = "PriceLens Contributors")]
pub struct Cli {
    /// Output snapshot path (default: ./pricing.json).
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Skip scraping: keep existing records, refresh only the exchange
    /// rate. Falls back to a normal scrape if no snapshot exists yet.
    #[arg(long)]
    pub no_scrape: bool,

    /// Verbose output (per-field resolution detail).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (no logging).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("pricelens_core=debug,pricelens_sources=debug,pricelens_store=debug,info")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli).await {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Configuration defects surface here, before any fetch.
    SourceRegistry::validate().context("source registry is misconfigured")?;

    let output = cli.output.clone().unwrap_or_else(default_output_path);
    info!(path = %output.display(), "output path");
    let previous = load_snapshot(&output).await;
    let prior = Arc::new(PriorIndex::from_snapshot(previous.as_ref()));
    let ctx = SourceContext::new();

    // The exchange rate refreshes even under --no-scrape.
    let exchange = fetch_usd_jpy(&ctx, &prior).await;

    let (api_models, plans) = if cli.no_scrape {
        if let Some(previous) = &previous {
            info!("--no-scrape: keeping existing records");
            (previous.api_models.clone(), previous.plans.clone())
        } else {
            warn!("--no-scrape requested but no snapshot exists, scraping");
            scrape(&ctx, &prior, previous.as_ref()).await
        }
    } else {
        scrape(&ctx, &prior, previous.as_ref()).await
    };

    let mut snapshot = PricingSnapshot::new(exchange, api_models, plans);
    save_snapshot(&output, &mut snapshot)
        .await
        .context("failed to write snapshot")?;

    info!(
        api_models = snapshot.api_models.len(),
        plans = snapshot.plans.len(),
        extracted = snapshot.extracted_count(),
        rate = snapshot.exchange_rate.rate,
        "done"
    );
    Ok(())
}

/// Runs all sources and merges against the previous snapshot.
async fn scrape(
    ctx: &SourceContext,
    prior: &Arc<PriorIndex>,
    previous: Option<&PricingSnapshot>,
) -> (Vec<ApiModelRecord>, Vec<PlanRecord>) {
    let outcome = run_all(ctx, prior).await;
    for failure in &outcome.failures {
        warn!(
            source = %failure.source,
            error = %failure.error,
            "source contributed no fresh records"
        );
    }

    let previous_api = previous.map(|p| p.api_models.clone()).unwrap_or_default();
    let previous_plans = previous.map(|p| p.plans.clone()).unwrap_or_default();
    (
        merge_records(outcome.api_models, previous_api),
        merge_records(outcome.plans, previous_plans),
    )
}
