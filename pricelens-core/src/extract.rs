//! Pattern-driven price extraction.
//!
//! A rule list is an ordered set of regex patterns, most specific first.
//! The first rule that both matches and yields a bounds-accepted number
//! wins; a matched-but-rejected value falls through to the next rule.
//! There is no scoring and no best-of-many selection.

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::bounds::ValueClass;
use crate::error::CoreError;

// ============================================================================
// Compiled Rules
// ============================================================================

/// An ordered, compiled extraction rule list.
///
/// Patterns are compiled case-insensitive with `.` matching newlines, since
/// rendered page text interleaves prices and labels across line breaks.
/// Compilation happens once, at registry validation time — a pattern that
/// fails to compile is a configuration defect, not a runtime condition.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    rules: Vec<Regex>,
}

impl CompiledRules {
    /// Compiles a pattern list, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSpec` naming the offending pattern if any
    /// pattern fails to compile.
    pub fn compile(patterns: &[&str]) -> Result<Self, CoreError> {
        let mut rules = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .dot_matches_new_line(true)
                .build()
                .map_err(|e| {
                    CoreError::InvalidSpec(format!("bad extraction rule {pattern:?}: {e}"))
                })?;
            rules.push(regex);
        }
        Ok(Self { rules })
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the list has no rules (fallback-maintained rows).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Extracts the first bounds-accepted price from `text`.
    ///
    /// Rules are evaluated in declaration order. For each rule, capture
    /// group 1 is parsed as a number (thousands separators stripped) and
    /// checked against the bounds for `class`. The first accepted value is
    /// returned and evaluation stops; misses and rejections fall through
    /// to the next rule. `None` means no rule matched and validated.
    pub fn extract(&self, text: &str, class: ValueClass) -> Option<f64> {
        for rule in &self.rules {
            let Some(caps) = rule.captures(text) else {
                continue;
            };
            let Some(group) = caps.get(1) else {
                continue;
            };
            let Ok(value) = group.as_str().replace(',', "").parse::<f64>() else {
                continue;
            };
            if class.accepts(value) {
                return Some(value);
            }
            trace!(rule = %rule.as_str(), value, "matched value rejected by bounds");
        }
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(patterns: &[&str]) -> CompiledRules {
        CompiledRules::compile(patterns).unwrap()
    }

    #[test]
    fn first_matching_rule_wins() {
        let r = rules(&[r"input[^$]*?\$([\d.]+)", r"\$([\d.]+)"]);
        let text = "Pricing: $99.00 setup. Input tokens $3.00 per 1M.";
        // The specific rule matches $3.00 even though the loose rule would
        // have matched $99.00 first in the text.
        assert_eq!(r.extract(text, ValueClass::TokenPrice), Some(3.0));
    }

    #[test]
    fn earlier_rule_beats_later_rule() {
        let r = rules(&[r"alpha \$([\d.]+)", r"beta \$([\d.]+)"]);
        let text = "beta $7.00 ... alpha $5.00";
        assert_eq!(r.extract(text, ValueClass::TokenPrice), Some(5.0));
    }

    #[test]
    fn bounds_rejection_falls_through_to_next_rule() {
        // First rule captures the context window; bounds reject it, and
        // the second rule finds the actual price.
        let r = rules(&[r"context[^\d]*([\d,]+)", r"\$([\d.]+)\s*/\s*1M"]);
        let text = "context window 200,000 tokens, $15.00 / 1M output";
        assert_eq!(r.extract(text, ValueClass::TokenPrice), Some(15.0));
    }

    #[test]
    fn no_match_returns_none() {
        let r = rules(&[r"opus[^$]*?\$([\d.]+)"]);
        assert_eq!(r.extract("nothing relevant here", ValueClass::TokenPrice), None);
    }

    #[test]
    fn strips_thousands_separators() {
        let r = rules(&[r"rate[^\d]*([\d,.]+)"]);
        assert_eq!(
            r.extract("rate 1,234.5 units", ValueClass::TokenPrice),
            Some(1234.5)
        );
    }

    #[test]
    fn case_insensitive_and_multiline() {
        let r = rules(&[r"sonnet[^$]*?\$\s*([\d.]+)"]);
        let text = "Claude SONNET 4.6\nInput\n$ 3.00 / MTok";
        assert_eq!(r.extract(text, ValueClass::TokenPrice), Some(3.0));
    }

    #[test]
    fn invalid_pattern_is_a_spec_defect() {
        let err = CompiledRules::compile(&[r"unclosed ( group"]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSpec(_)));
    }

    #[test]
    fn empty_rule_list_never_extracts() {
        let r = rules(&[]);
        assert!(r.is_empty());
        assert_eq!(r.extract("$3.00", ValueClass::TokenPrice), None);
    }
}
