// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PriceLens` Store
//!
//! Snapshot persistence.
//!
//! The snapshot file is the only persisted entity in the system. It is
//! read once at startup (the previous run's values are the middle tier of
//! the fallback chain) and written once at the end of a run, atomically.
//! A missing or unreadable previous snapshot is a warning, not an error;
//! a failed write is the one fatal condition in the whole pipeline.

pub mod error;
pub mod persistence;

pub use error::StoreError;
pub use persistence::{default_output_path, load_snapshot, save_snapshot};
