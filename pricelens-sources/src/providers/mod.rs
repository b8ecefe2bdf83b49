//! API provider sources.
//!
//! One module per vendor pricing page (or pricing API). Each exposes a
//! single static [`crate::spec::ApiSourceSpec`] table; the engine supplies
//! all the behavior.

pub mod anthropic;
pub mod aws;
pub mod deepseek;
pub mod google;
pub mod openai;
pub mod xai;
