//! Claude Code plan source.
//!
//! <https://docs.anthropic.com/en/docs/claude-code/pricing>

use crate::spec::{PlanOfferingSpec, PlanSourceSpec};

pub static SOURCE: PlanSourceSpec = PlanSourceSpec {
    label: "Claude Code",
    url: "https://docs.anthropic.com/en/docs/claude-code/pricing",
    offerings: &[
        PlanOfferingSpec {
            group: "Claude Code",
            name: "Pro",
            default_monthly: 20.0,
            annual: Some(17.0),
            tag: "Individual",
            cls: "tag-bal",
            note_ja: "~45 msg/5h | Claude CLI含む",
            note_en: "~45 msg/5h | Includes Claude CLI",
            rules: &[r"pro[^$\n]*?\$([\d]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "Claude Code",
            name: "Max 5x",
            default_monthly: 100.0,
            annual: None,
            tag: "Power",
            cls: "tag-flag",
            note_ja: "~225 msg/5h | Pro×5",
            note_en: "~225 msg/5h | Pro×5",
            rules: &[r"max[^$\n]*?5x[^$\n]*?\$([\d]+)"],
        },
        PlanOfferingSpec {
            group: "Claude Code",
            name: "Max 20x",
            default_monthly: 200.0,
            annual: None,
            tag: "Max",
            cls: "tag-flag",
            note_ja: "~900 msg/5h | Pro×20",
            note_en: "~900 msg/5h | Pro×20",
            rules: &[r"max[^$\n]*?20x[^$\n]*?\$([\d]+)"],
        },
        PlanOfferingSpec {
            group: "Claude Code",
            name: "Team Standard",
            default_monthly: 30.0,
            annual: Some(25.0),
            tag: "Team",
            cls: "tag-bal",
            note_ja: "SSO + 集中課金 | /user (5席~)",
            note_en: "SSO + centralized billing | /user (5+ seats)",
            rules: &[r"team[^$\n]*?\$([\d]+)\s*/\s*(?:user|member)"],
        },
    ],
};
