//! GitHub Copilot plan source.
//!
//! <https://github.com/features/copilot#pricing>

use crate::spec::{PlanOfferingSpec, PlanSourceSpec};

pub static SOURCE: PlanSourceSpec = PlanSourceSpec {
    label: "GitHub Copilot",
    url: "https://github.com/features/copilot#pricing",
    offerings: &[
        PlanOfferingSpec {
            group: "GitHub Copilot",
            name: "Free",
            default_monthly: 0.0,
            annual: Some(0.0),
            tag: "Free",
            cls: "tag-mini",
            note_ja: "2,000補完+50 Premium req/月",
            note_en: "2,000 completions + 50 Premium req/mo",
            rules: &[],
        },
        PlanOfferingSpec {
            group: "GitHub Copilot",
            name: "Pro",
            default_monthly: 10.0,
            annual: Some(100.0),
            tag: "Individual",
            cls: "tag-bal",
            note_ja: "300 Premium req/月 | 学生無料",
            note_en: "300 Premium req/mo | Free for students",
            rules: &[r"pro[^$\n]*?\$([\d]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "GitHub Copilot",
            name: "Pro+",
            default_monthly: 39.0,
            annual: Some(390.0),
            tag: "Pro+",
            cls: "tag-flag",
            note_ja: "1,500 req/月 | 全モデルアクセス",
            note_en: "1,500 req/mo | All model access",
            rules: &[r"pro\+[^$\n]*?\$([\d]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "GitHub Copilot",
            name: "Business",
            default_monthly: 19.0,
            annual: None,
            tag: "Team",
            cls: "tag-bal",
            note_ja: "超過 $0.04/req | /user/month",
            note_en: "Overage $0.04/req | /user/month",
            rules: &[r"business[^$\n]*?\$([\d]+)\s*/\s*(?:user|seat)"],
        },
        PlanOfferingSpec {
            group: "GitHub Copilot",
            name: "Enterprise",
            default_monthly: 39.0,
            annual: None,
            tag: "Enterprise",
            cls: "tag-flag",
            note_ja: "全機能 + GH Enterprise Cloud",
            note_en: "All features + GH Enterprise Cloud",
            rules: &[r"enterprise[^$\n]*?\$([\d]+)\s*/\s*(?:user|seat)"],
        },
    ],
};
