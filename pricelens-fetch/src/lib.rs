// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PriceLens` Fetch
//!
//! Content acquisition for the `PriceLens` scraper.
//!
//! Everything in this crate is a collaborator from the engine's point of
//! view: it turns a URL into page text or a parsed JSON document, or fails
//! with a [`FetchError`]. The engine treats any failure here identically —
//! the affected source resolves through its fallback chain and the run
//! continues.
//!
//! - [`HttpClient`] - `reqwest` wrapper with timeout, user agent, tracing
//! - [`PageFetcher`] - trait for rendered-page text acquisition
//! - [`JsonFetcher`] - trait for structured pricing-API documents

pub mod client;
pub mod error;
pub mod json;
pub mod page;

pub use client::HttpClient;
pub use error::FetchError;
pub use json::{HttpJsonFetcher, JsonFetcher};
pub use page::{HttpPageFetcher, PageFetcher};
