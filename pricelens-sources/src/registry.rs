//! Source registry.
//!
//! The registry is the complete, static list of everything the scraper
//! tracks. It is initialized lazily, validated once at startup, and never
//! mutated at runtime.

use std::collections::HashSet;
use std::sync::OnceLock;

use pricelens_core::{CompiledRules, CoreError};

use crate::plans;
use crate::providers;
use crate::spec::{ApiSourceSpec, PlanSourceSpec};

// ============================================================================
// Static Registry
// ============================================================================

static API_SOURCES: OnceLock<Vec<&'static ApiSourceSpec>> = OnceLock::new();
static PLAN_SOURCES: OnceLock<Vec<&'static PlanSourceSpec>> = OnceLock::new();

/// Declaration order here is snapshot display order.
fn init_api_sources() -> Vec<&'static ApiSourceSpec> {
    vec![
        &providers::anthropic::SOURCE,
        &providers::openai::SOURCE,
        &providers::google::SOURCE,
        &providers::aws::SOURCE,
        &providers::deepseek::SOURCE,
        &providers::xai::SOURCE,
    ]
}

fn init_plan_sources() -> Vec<&'static PlanSourceSpec> {
    vec![
        &plans::copilot::SOURCE,
        &plans::cursor::SOURCE,
        &plans::windsurf::SOURCE,
        &plans::claude_code::SOURCE,
        &plans::jetbrains::SOURCE,
        &plans::codex::SOURCE,
        &plans::google_one::SOURCE,
        &plans::antigravity::SOURCE,
    ]
}

// ============================================================================
// Source Registry
// ============================================================================

/// Global registry of all source specifications.
pub struct SourceRegistry;

impl SourceRegistry {
    /// All API model sources, in declaration order.
    pub fn api_sources() -> &'static [&'static ApiSourceSpec] {
        API_SOURCES.get_or_init(init_api_sources)
    }

    /// All subscription plan sources, in declaration order.
    pub fn plan_sources() -> &'static [&'static PlanSourceSpec] {
        PLAN_SOURCES.get_or_init(init_plan_sources)
    }

    /// Total number of sources.
    pub fn source_count() -> usize {
        Self::api_sources().len() + Self::plan_sources().len()
    }

    /// Total number of tracked offerings.
    pub fn offering_count() -> usize {
        let api: usize = Self::api_sources().iter().map(|s| s.offerings.len()).sum();
        let plans: usize = Self::plan_sources().iter().map(|s| s.offerings.len()).sum();
        api + plans
    }

    /// Validates every table entry.
    ///
    /// Run once at startup so configuration defects surface before any
    /// fetch: every rule must compile, every default must be a sane
    /// number, and record identities must be unique across the registry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSpec` naming the offending entry.
    pub fn validate() -> Result<(), CoreError> {
        let mut identities = HashSet::new();
        for source in Self::api_sources() {
            for offering in source.offerings {
                if !identities.insert((offering.provider, offering.name)) {
                    return Err(CoreError::InvalidSpec(format!(
                        "duplicate offering {}/{}",
                        offering.provider, offering.name
                    )));
                }
                for default in [offering.default_in, offering.default_out] {
                    if !default.is_finite() || default < 0.0 {
                        return Err(CoreError::InvalidSpec(format!(
                            "{}/{}: bad default {default}",
                            offering.provider, offering.name
                        )));
                    }
                }
                CompiledRules::compile(offering.input_rules)?;
                CompiledRules::compile(offering.output_rules)?;
            }
        }

        let mut identities = HashSet::new();
        for source in Self::plan_sources() {
            for offering in source.offerings {
                if !identities.insert((offering.group, offering.name)) {
                    return Err(CoreError::InvalidSpec(format!(
                        "duplicate plan {}/{}",
                        offering.group, offering.name
                    )));
                }
                if !offering.default_monthly.is_finite() || offering.default_monthly < 0.0 {
                    return Err(CoreError::InvalidSpec(format!(
                        "{}/{}: bad default {}",
                        offering.group, offering.name, offering.default_monthly
                    )));
                }
                CompiledRules::compile(offering.rules)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_validates() {
        SourceRegistry::validate().unwrap();
    }

    #[test]
    fn registry_is_populated() {
        assert_eq!(SourceRegistry::api_sources().len(), 6);
        assert_eq!(SourceRegistry::plan_sources().len(), 8);
        // 31 API models + 31 plans tracked today.
        assert_eq!(SourceRegistry::offering_count(), 62);
    }

    #[test]
    fn identities_are_unique() {
        let mut seen = HashSet::new();
        for source in SourceRegistry::api_sources() {
            for o in source.offerings {
                assert!(seen.insert((o.provider, o.name)), "dup {}/{}", o.provider, o.name);
            }
        }
    }

    #[test]
    fn every_offering_has_a_last_resort_default() {
        // The fallback chain may never bottom out: hardcoded defaults are
        // non-optional by construction, so this asserts they are usable.
        for source in SourceRegistry::api_sources() {
            for o in source.offerings {
                assert!(o.default_in >= 0.0 && o.default_out >= 0.0);
            }
        }
        for source in SourceRegistry::plan_sources() {
            for o in source.offerings {
                assert!(o.default_monthly >= 0.0);
            }
        }
    }
}
