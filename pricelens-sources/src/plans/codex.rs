//! OpenAI Codex (ChatGPT) plan source.
//!
//! <https://openai.com/chatgpt/pricing/>

use crate::spec::{PlanOfferingSpec, PlanSourceSpec};

pub static SOURCE: PlanSourceSpec = PlanSourceSpec {
    label: "OpenAI Codex",
    url: "https://openai.com/chatgpt/pricing/",
    offerings: &[
        PlanOfferingSpec {
            group: "OpenAI Codex",
            name: "ChatGPT Plus (Codex)",
            default_monthly: 20.0,
            annual: None,
            tag: "Plus",
            cls: "tag-bal",
            note_ja: "30-150 tasks/5h | codex-1",
            note_en: "30-150 tasks/5h | codex-1",
            rules: &[r"plus[^$\n]*?\$([\d]+)\s*/\s*month"],
        },
        PlanOfferingSpec {
            group: "OpenAI Codex",
            name: "ChatGPT Pro (Codex)",
            default_monthly: 200.0,
            annual: None,
            tag: "Pro",
            cls: "tag-flag",
            note_ja: "300-1500 tasks/5h | 全機能",
            note_en: "300-1500 tasks/5h | All features",
            rules: &[r"(?:chatgpt\s+)?pro[^$\n]*?\$([\d]+)\s*/\s*month"],
        },
    ],
};
