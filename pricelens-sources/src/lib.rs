// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PriceLens` Sources
//!
//! Per-vendor source specifications and the generic engine that executes
//! them.
//!
//! Every vendor is a data table ([`spec::ApiSourceSpec`] /
//! [`spec::PlanSourceSpec`]): URLs, ordered extraction rules, hardcoded
//! defaults, display metadata. The engine ([`engine`]) is the only control
//! flow — adding a vendor means adding a table entry, never new code
//! paths. The runner ([`runner`]) executes sources as isolated tasks so
//! one vendor redesigning their pricing page can never block the others.

pub mod context;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod plans;
pub mod prior;
pub mod providers;
pub mod registry;
pub mod runner;
pub mod spec;
mod structured;

pub use context::SourceContext;
pub use error::SourceError;
pub use exchange::fetch_usd_jpy;
pub use prior::PriorIndex;
pub use registry::SourceRegistry;
pub use runner::{run_all, AdapterFailure, RunOutcome};
