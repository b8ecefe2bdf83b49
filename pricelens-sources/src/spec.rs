//! Source specification types.
//!
//! A spec is immutable configuration: defined once per vendor as a static
//! table, shared read-only by every run, never mutated. The engine is
//! parameterized entirely by these tables.

// ============================================================================
// Content Source
// ============================================================================

/// Where a source's raw content comes from.
#[derive(Debug, Clone, Copy)]
pub enum ContentSource {
    /// A marketing page rendered to text.
    RenderedPage {
        /// Page URL.
        url: &'static str,
        /// Content the fully rendered page is expected to contain; passed
        /// to renderers that can wait on it.
        wait_hint: Option<&'static str>,
    },
    /// A structured pricing API (JSON without a schema guarantee).
    PricingApi {
        /// Document URL.
        url: &'static str,
    },
}

// ============================================================================
// API Model Sources
// ============================================================================

/// One API model row: extraction rules, defaults, display metadata.
///
/// Rows with empty rule lists (and, for structured sources, empty keyword
/// lists) are fallback-maintained: legacy models and mirror rows whose
/// prices are tracked by hand.
#[derive(Debug, Clone, Copy)]
pub struct ApiOfferingSpec {
    /// Vendor shown in the dataset ("Anthropic", "Google AI", ...). A
    /// source may span several (Google AI + Vertex AI share a page).
    pub provider: &'static str,
    /// Model display name.
    pub name: &'static str,
    /// Display tag.
    pub tag: &'static str,
    /// CSS classification hook.
    pub cls: &'static str,
    /// Japanese one-line blurb.
    pub blurb_ja: &'static str,
    /// English one-line blurb.
    pub blurb_en: &'static str,
    /// Hardcoded default, USD per 1M input tokens.
    pub default_in: f64,
    /// Hardcoded default, USD per 1M output tokens.
    pub default_out: f64,
    /// Ordered rules for the input price, most specific first.
    pub input_rules: &'static [&'static str],
    /// Ordered rules for the output price, most specific first.
    pub output_rules: &'static [&'static str],
    /// Model-matching keywords for structured pricing APIs. Empty for
    /// rendered-page sources.
    pub api_keywords: &'static [&'static str],
}

/// One vendor source producing API model records.
#[derive(Debug, Clone, Copy)]
pub struct ApiSourceSpec {
    /// Label used in logs and failure reports.
    pub label: &'static str,
    /// Where the content comes from.
    pub source: ContentSource,
    /// Offerings in display order.
    pub offerings: &'static [ApiOfferingSpec],
}

// ============================================================================
// Subscription Plan Sources
// ============================================================================

/// One subscription plan row.
#[derive(Debug, Clone, Copy)]
pub struct PlanOfferingSpec {
    /// Tool group shown in the dataset.
    pub group: &'static str,
    /// Plan display name.
    pub name: &'static str,
    /// Hardcoded default, USD per seat-month.
    pub default_monthly: f64,
    /// Month-equivalent annual price; static metadata, never extracted.
    pub annual: Option<f64>,
    /// Display tag.
    pub tag: &'static str,
    /// CSS classification hook.
    pub cls: &'static str,
    /// Japanese one-line note.
    pub note_ja: &'static str,
    /// English one-line note.
    pub note_en: &'static str,
    /// Ordered rules for the monthly price. Empty for free tiers and
    /// hand-tracked rows.
    pub rules: &'static [&'static str],
}

/// One tool source producing plan records.
#[derive(Debug, Clone, Copy)]
pub struct PlanSourceSpec {
    /// Label used in logs and failure reports.
    pub label: &'static str,
    /// Pricing page URL.
    pub url: &'static str,
    /// Offerings in display order.
    pub offerings: &'static [PlanOfferingSpec],
}
