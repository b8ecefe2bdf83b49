//! Windsurf plan source.
//!
//! <https://windsurf.com/pricing>

use crate::spec::{PlanOfferingSpec, PlanSourceSpec};

pub static SOURCE: PlanSourceSpec = PlanSourceSpec {
    label: "Windsurf",
    url: "https://windsurf.com/pricing",
    offerings: &[
        PlanOfferingSpec {
            group: "Windsurf",
            name: "Free",
            default_monthly: 0.0,
            annual: None,
            tag: "Free",
            cls: "tag-mini",
            note_ja: "25 credits/月 | 全モデル対応",
            note_en: "25 credits/mo | All models",
            rules: &[],
        },
        PlanOfferingSpec {
            group: "Windsurf",
            name: "Pro",
            default_monthly: 15.0,
            annual: None,
            tag: "Individual",
            cls: "tag-bal",
            note_ja: "500 credits/月 | SWE-1.5 含む",
            note_en: "500 credits/mo | Includes SWE-1.5",
            rules: &[r"pro[^$\n]*?\$([\d]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "Windsurf",
            name: "Teams",
            default_monthly: 30.0,
            annual: None,
            tag: "Team",
            cls: "tag-bal",
            note_ja: "500 credits/user + 管理機能",
            note_en: "500 credits/user + admin features",
            rules: &[r"team[^$\n]*?\$([\d]+)\s*/\s*(?:user|month)"],
        },
    ],
};
