//! Cursor plan source.
//!
//! <https://cursor.com/pricing>

use crate::spec::{PlanOfferingSpec, PlanSourceSpec};

pub static SOURCE: PlanSourceSpec = PlanSourceSpec {
    label: "Cursor",
    url: "https://cursor.com/pricing",
    offerings: &[
        PlanOfferingSpec {
            group: "Cursor",
            name: "Hobby",
            default_monthly: 0.0,
            annual: None,
            tag: "Free",
            cls: "tag-mini",
            note_ja: "2週間Proトライアル含む",
            note_en: "Includes 2-week Pro trial",
            rules: &[],
        },
        PlanOfferingSpec {
            group: "Cursor",
            name: "Pro",
            default_monthly: 20.0,
            annual: Some(16.0),
            tag: "Individual",
            cls: "tag-bal",
            note_ja: "無制限補完 + 500 fast req/月",
            note_en: "Unlimited completions + 500 fast req/mo",
            rules: &[r"pro[^$\n]*?\$([\d]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "Cursor",
            name: "Ultra",
            default_monthly: 200.0,
            annual: None,
            tag: "Power",
            cls: "tag-flag",
            note_ja: "Pro×20 リミット / 優先アクセス",
            note_en: "20x Pro limits / priority access",
            rules: &[r"ultra[^$\n]*?\$([\d]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "Cursor",
            name: "Teams",
            default_monthly: 40.0,
            annual: Some(32.0),
            tag: "Team",
            cls: "tag-bal",
            note_ja: "SSO + 管理ダッシュ | /user",
            note_en: "SSO + admin dashboard | /user",
            rules: &[r"teams?[^$\n]*?\$([\d]+)\s*/\s*(?:user|month)"],
        },
    ],
};
