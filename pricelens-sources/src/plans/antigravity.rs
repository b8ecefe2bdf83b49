//! Antigravity (Google) plan source.
//!
//! <https://antigravity.google/pricing>
//!
//! Heavily client-rendered page; extraction rarely lands and the rows are
//! flagged for manual verification in their notes.

use crate::spec::{PlanOfferingSpec, PlanSourceSpec};

pub static SOURCE: PlanSourceSpec = PlanSourceSpec {
    label: "Antigravity",
    url: "https://antigravity.google/pricing",
    offerings: &[
        PlanOfferingSpec {
            group: "Antigravity",
            name: "Free",
            default_monthly: 0.0,
            annual: None,
            tag: "Free (Google)",
            cls: "tag-mini",
            note_ja: "⚠要確認 / antigravity.google / 基本機能",
            note_en: "⚠ Verify / antigravity.google / Basic features",
            rules: &[],
        },
        PlanOfferingSpec {
            group: "Antigravity",
            name: "Pro",
            default_monthly: 20.0,
            annual: None,
            tag: "Indiv. ⚠",
            cls: "tag-ag",
            note_ja: "⚠要確認 / antigravity.google/pricing",
            note_en: "⚠ Verify at antigravity.google/pricing",
            rules: &[
                r"pro[^$\n]*?\$([\d.]+)\s*/\s*(?:month|mo|user)",
                r"\$([\d.]+)[^$\n]*?pro",
            ],
        },
        PlanOfferingSpec {
            group: "Antigravity",
            name: "Team",
            default_monthly: 40.0,
            annual: None,
            tag: "Team ⚠",
            cls: "tag-ag",
            note_ja: "⚠要確認 / SSO + 管理 / /user",
            note_en: "⚠ Verify / SSO + admin / /user",
            rules: &[
                r"team[^$\n]*?\$([\d.]+)\s*/\s*(?:month|mo|user)",
                r"\$([\d.]+)[^$\n]*?team",
            ],
        },
    ],
};
