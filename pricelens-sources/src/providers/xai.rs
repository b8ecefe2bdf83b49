//! xAI (Grok) pricing page source.
//!
//! <https://x.ai/api>

use crate::spec::{ApiOfferingSpec, ApiSourceSpec, ContentSource};

pub static SOURCE: ApiSourceSpec = ApiSourceSpec {
    label: "xAI",
    source: ContentSource::RenderedPage {
        url: "https://x.ai/api",
        wait_hint: None,
    },
    offerings: &[
        ApiOfferingSpec {
            provider: "xAI",
            name: "Grok 4",
            tag: "Flagship",
            cls: "tag-flag",
            blurb_ja: "Jul 2025 / 256K ctx",
            blurb_en: "Jul 2025 / 256K ctx",
            default_in: 3.00,
            default_out: 15.00,
            input_rules: &[r"grok[-\s]?4[^$]*?\$([\d.]+)"],
            output_rules: &[r"grok[-\s]?4[^$]*?output[^$]*?\$([\d.]+)"],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "xAI",
            name: "Grok 4.1 Fast",
            tag: "Fast",
            cls: "tag-mini",
            blurb_ja: "2Mコンテキスト / 業界最安クラス",
            blurb_en: "2M context / among cheapest in class",
            default_in: 0.20,
            default_out: 0.50,
            input_rules: &[r"grok[-\s]?4\.1[-\s]?fast[^$]*?\$([\d.]+)"],
            output_rules: &[r"grok[-\s]?4\.1[-\s]?fast[^$]*?output[^$]*?\$([\d.]+)"],
            api_keywords: &[],
        },
    ],
};
