//! Google One AI plan source.
//!
//! <https://one.google.com/about/google-ai-plans/>

use crate::spec::{PlanOfferingSpec, PlanSourceSpec};

pub static SOURCE: PlanSourceSpec = PlanSourceSpec {
    label: "Google One AI",
    url: "https://one.google.com/about/google-ai-plans/",
    offerings: &[
        PlanOfferingSpec {
            group: "Google One AI",
            name: "AI Plus",
            default_monthly: 9.99,
            annual: None,
            tag: "Plus",
            cls: "tag-bal",
            note_ja: "200GB / Gemini 3.1 Pro / Veo 3.1 Fast / Jules (coding)",
            note_en: "200 GB / Gemini 3.1 Pro / Veo 3.1 Fast / Jules (coding)",
            rules: &[
                r"ai\s+plus[^$\n]*?\$([\d.]+)\s*/\s*m(?:o|onth)",
                r"\$([\d.]+)[^$\n]*?ai\s+plus",
            ],
        },
        PlanOfferingSpec {
            group: "Google One AI",
            name: "AI Pro",
            default_monthly: 19.99,
            annual: None,
            tag: "Pro",
            cls: "tag-flag",
            note_ja: "2TB / Deep Research / Jules 拡張 / Google Home Premium",
            note_en: "2 TB / Deep Research / Jules extended / Google Home Premium",
            rules: &[
                r"ai\s+pro[^$\n]*?\$([\d.]+)\s*/\s*m(?:o|onth)",
                r"\$([\d.]+)[^$\n]*?ai\s+pro",
            ],
        },
        PlanOfferingSpec {
            group: "Google One AI",
            name: "AI Ultra",
            default_monthly: 249.99,
            annual: None,
            tag: "Ultra",
            cls: "tag-flag",
            note_ja: "30TB / Deep Think / Mariner / YouTube Premium / 最上位",
            note_en: "30 TB / Deep Think / Project Mariner / YouTube Premium / Top tier",
            rules: &[
                r"ai\s+ultra[^$\n]*?\$([\d.]+)\s*/\s*m(?:o|onth)",
                r"\$([\d.]+)[^$\n]*?ai\s+ultra",
            ],
        },
    ],
};
