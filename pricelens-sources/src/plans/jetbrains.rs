//! JetBrains AI / Junie plan source.
//!
//! <https://www.jetbrains.com/ai/#plans>
//!
//! Junie rows are bundled with AI Pro / AI Business and share their
//! prices; they exist as separate display rows, not separate SKUs.

use crate::spec::{PlanOfferingSpec, PlanSourceSpec};

pub static SOURCE: PlanSourceSpec = PlanSourceSpec {
    label: "JetBrains AI / Junie",
    url: "https://www.jetbrains.com/ai/#plans",
    offerings: &[
        PlanOfferingSpec {
            group: "JetBrains AI",
            name: "Free (基本AI機能)",
            default_monthly: 0.0,
            annual: Some(0.0),
            tag: "Free",
            cls: "tag-mini",
            note_ja: "補完・基本チャット / 10 AI actions/day",
            note_en: "Completions & basic chat / 10 AI actions/day",
            rules: &[],
        },
        PlanOfferingSpec {
            group: "JetBrains AI",
            name: "AI Pro (Individual)",
            default_monthly: 10.0,
            annual: Some(100.0),
            tag: "Individual",
            cls: "tag-jb",
            note_ja: "無制限AI補完+チャット / 全IDE / ローカルモデル可",
            note_en: "Unlimited AI completion+chat / All IDEs / local models",
            rules: &[r"ai\s+pro[^$\n]*?\$([\d.]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "JetBrains AI",
            name: "AI Pro (All Products Pack)",
            default_monthly: 28.90,
            annual: None,
            tag: "All IDEs",
            cls: "tag-jb",
            note_ja: "全JetBrains IDE + AI Pro込み",
            note_en: "All JetBrains IDEs + AI Pro included",
            rules: &[r"all\s+products[^$\n]*?\$([\d.]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "JetBrains AI",
            name: "AI Business (Team)",
            default_monthly: 20.0,
            annual: None,
            tag: "Team",
            cls: "tag-jb",
            note_ja: "管理ダッシュ / SSO / 請求統合 /user",
            note_en: "Admin dashboard / SSO / centralized billing /user",
            rules: &[r"ai\s+business[^$\n]*?\$([\d.]+)\s*/\s*(?:user|month)"],
        },
        PlanOfferingSpec {
            group: "JetBrains AI",
            name: "AI Enterprise",
            default_monthly: 30.0,
            annual: None,
            tag: "Enterprise",
            cls: "tag-jb",
            note_ja: "セルフホスト / BYOK / カスタムモデル /user",
            note_en: "Self-hosted / BYOK / custom models /user",
            rules: &[r"ai\s+enterprise[^$\n]*?\$([\d.]+)\s*/\s*(?:user|month)"],
        },
        PlanOfferingSpec {
            group: "Junie (JetBrains)",
            name: "AI Pro incl. (Individual)",
            default_monthly: 10.0,
            annual: Some(100.0),
            tag: "Agent",
            cls: "tag-jb",
            note_ja: "AI Pro に含む / IntelliJ対応 / 自律タスク",
            note_en: "Included in AI Pro / IntelliJ / autonomous tasks",
            rules: &[],
        },
        PlanOfferingSpec {
            group: "Junie (JetBrains)",
            name: "AI Business incl. (Team)",
            default_monthly: 20.0,
            annual: None,
            tag: "Team Agent",
            cls: "tag-jb",
            note_ja: "チーム向けJunie / 管理ダッシュ /user",
            note_en: "Junie for teams / admin dashboard /user",
            rules: &[],
        },
    ],
};
