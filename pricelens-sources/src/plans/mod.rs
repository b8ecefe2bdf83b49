//! Coding tool / subscription plan sources.
//!
//! Seat prices change rarely; these tables mostly act as change detection.
//! A page price that diverges from the table shows up as an extracted
//! value and a warning trail in the logs.

pub mod antigravity;
pub mod claude_code;
pub mod codex;
pub mod copilot;
pub mod cursor;
pub mod google_one;
pub mod jetbrains;
pub mod windsurf;
