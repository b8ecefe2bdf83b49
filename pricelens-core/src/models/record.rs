//! Offering records and provenance status.
//!
//! Records are value objects: constructed once per run, never patched in
//! place. Status reconciliation and snapshot carry-over always build new
//! values.

use serde::{Deserialize, Serialize};

// ============================================================================
// Provenance
// ============================================================================

/// How a record's final price value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Freshly extracted from the vendor's page or API this run.
    Extracted,
    /// Hand-maintained row, never scraped.
    Manual,
    /// Carried over from the previous snapshot.
    CarriedFallback,
    /// Hardcoded registry default, the last resort.
    HardcodedFallback,
}

impl Provenance {
    /// Returns true for the two fallback tiers.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::CarriedFallback | Self::HardcodedFallback)
    }

    /// Trust rank, lower is better. Used to pick the worst status in a
    /// coupled field group.
    fn rank(self) -> u8 {
        match self {
            Self::Extracted => 0,
            Self::Manual => 1,
            Self::CarriedFallback => 2,
            Self::HardcodedFallback => 3,
        }
    }

    /// Returns the less trustworthy of two statuses.
    pub fn worst(self, other: Self) -> Self {
        if self.rank() >= other.rank() { self } else { other }
    }

    /// Short name used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Extracted => "extracted",
            Self::Manual => "manual",
            Self::CarriedFallback => "carried_fallback",
            Self::HardcodedFallback => "hardcoded_fallback",
        }
    }
}

// ============================================================================
// Offering Identity
// ============================================================================

/// Identity of one priced offering within a snapshot.
///
/// For API models this is (provider, model name); for plans it is
/// (tool group, plan name). Unique within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OfferingKey {
    /// Vendor / tool group.
    pub vendor: String,
    /// Offering display name.
    pub name: String,
}

impl OfferingKey {
    /// Creates a key from vendor and offering name.
    pub fn new(vendor: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            name: name.into(),
        }
    }
}

/// A record that can be merged against a previous snapshot.
///
/// Implemented by both record kinds so the merger is generic over them.
pub trait OfferingRecord {
    /// Snapshot-unique identity.
    fn key(&self) -> OfferingKey;

    /// Current provenance status.
    fn status(&self) -> Provenance;

    /// Returns this record re-tagged as carried from a previous snapshot.
    /// Records already at a fallback tier keep their status.
    fn into_carried(self) -> Self;
}

// ============================================================================
// API Model Record
// ============================================================================

/// One API model with per-token input/output prices (USD per 1M tokens).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModelRecord {
    /// Vendor name ("Anthropic", "Google AI", ...).
    pub provider: String,
    /// Model display name.
    pub name: String,
    /// Short display tag ("Flagship", "Legacy", ...).
    pub tag: String,
    /// CSS classification hook for the pricing page.
    pub cls: String,
    /// USD per 1M input tokens.
    pub price_in: f64,
    /// USD per 1M output tokens.
    pub price_out: f64,
    /// Japanese one-line blurb.
    pub blurb_ja: String,
    /// English one-line blurb.
    pub blurb_en: String,
    /// How the price pair was obtained. The input/output pair is
    /// reconciled jointly, so one status covers both fields.
    pub status: Provenance,
}

impl OfferingRecord for ApiModelRecord {
    fn key(&self) -> OfferingKey {
        OfferingKey::new(self.provider.clone(), self.name.clone())
    }

    fn status(&self) -> Provenance {
        self.status
    }

    fn into_carried(mut self) -> Self {
        if !self.status.is_fallback() {
            self.status = Provenance::CarriedFallback;
        }
        self
    }
}

// ============================================================================
// Plan Record
// ============================================================================

/// One subscription plan with a monthly seat price (USD per seat-month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Tool group ("GitHub Copilot", "Claude Code", ...).
    pub group: String,
    /// Plan display name.
    pub name: String,
    /// USD per seat per month.
    pub monthly: f64,
    /// Month-equivalent annual price, if the plan has annual billing.
    /// Static display metadata, never extracted.
    pub annual: Option<f64>,
    /// Short display tag ("Individual", "Team", ...).
    pub tag: String,
    /// CSS classification hook for the pricing page.
    pub cls: String,
    /// Japanese one-line note.
    pub note_ja: String,
    /// English one-line note.
    pub note_en: String,
    /// How the monthly price was obtained.
    pub status: Provenance,
}

impl OfferingRecord for PlanRecord {
    fn key(&self) -> OfferingKey {
        OfferingKey::new(self.group.clone(), self.name.clone())
    }

    fn status(&self) -> Provenance {
        self.status
    }

    fn into_carried(mut self) -> Self {
        if !self.status.is_fallback() {
            self.status = Provenance::CarriedFallback;
        }
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_orders_extracted_best() {
        use Provenance::*;
        assert_eq!(Extracted.worst(CarriedFallback), CarriedFallback);
        assert_eq!(CarriedFallback.worst(HardcodedFallback), HardcodedFallback);
        assert_eq!(Extracted.worst(Extracted), Extracted);
        assert_eq!(Manual.worst(Extracted), Manual);
    }

    #[test]
    fn carried_preserves_existing_fallback_tier() {
        let record = PlanRecord {
            group: "Windsurf".into(),
            name: "Pro".into(),
            monthly: 15.0,
            annual: None,
            tag: "Individual".into(),
            cls: "tag-bal".into(),
            note_ja: String::new(),
            note_en: String::new(),
            status: Provenance::HardcodedFallback,
        };
        assert_eq!(
            record.into_carried().status,
            Provenance::HardcodedFallback
        );
    }

    #[test]
    fn carried_demotes_extracted() {
        let record = ApiModelRecord {
            provider: "xAI".into(),
            name: "Grok 4".into(),
            tag: "Flagship".into(),
            cls: "tag-flag".into(),
            price_in: 3.0,
            price_out: 15.0,
            blurb_ja: String::new(),
            blurb_en: String::new(),
            status: Provenance::Extracted,
        };
        assert_eq!(record.into_carried().status, Provenance::CarriedFallback);
    }
}
