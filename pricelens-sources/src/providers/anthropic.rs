//! Anthropic pricing page source.
//!
//! <https://www.anthropic.com/pricing>

use crate::spec::{ApiOfferingSpec, ApiSourceSpec, ContentSource};

/// Legacy and budget rows are fallback-maintained: their prices are long
/// settled and the page no longer lists them prominently.
pub static SOURCE: ApiSourceSpec = ApiSourceSpec {
    label: "Anthropic",
    source: ContentSource::RenderedPage {
        url: "https://www.anthropic.com/pricing",
        wait_hint: None,
    },
    offerings: &[
        ApiOfferingSpec {
            provider: "Anthropic",
            name: "Claude Opus 4.6",
            tag: "最新",
            cls: "tag-flag",
            blurb_ja: "エージェントチーム / 200K",
            blurb_en: "Agent teams / 200K ctx",
            default_in: 5.00,
            default_out: 25.00,
            input_rules: &[
                r"opus[^\n]*?4\.6[^\n]*?\$\s*([\d.]+)",
                r"claude-opus-4[^\n]*?\$\s*([\d.]+)",
            ],
            output_rules: &[r"opus[^\n]*?4\.6[^\n]*?\$[\d.]+[^\n]*?\$\s*([\d.]+)"],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Anthropic",
            name: "Claude Sonnet 4.6",
            tag: "最新",
            cls: "tag-flag",
            blurb_ja: "バランス最適 / 200K",
            blurb_en: "Optimal balance / 200K ctx",
            default_in: 3.00,
            default_out: 15.00,
            input_rules: &[
                r"sonnet[^\n]*?4\.6[^\n]*?\$\s*([\d.]+)",
                r"claude-sonnet-4[^\n]*?\$\s*([\d.]+)",
            ],
            output_rules: &[r"sonnet[^\n]*?4\.6[^\n]*?\$[\d.]+[^\n]*?\$\s*([\d.]+)"],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Anthropic",
            name: "Claude Haiku 4.5",
            tag: "Fast",
            cls: "tag-mini",
            blurb_ja: "高速・高ボリューム向け",
            blurb_en: "Fast / high-volume use cases",
            default_in: 1.00,
            default_out: 5.00,
            input_rules: &[
                r"haiku[^\n]*?4\.5[^\n]*?\$\s*([\d.]+)",
                r"claude-haiku-4[^\n]*?\$\s*([\d.]+)",
            ],
            output_rules: &[r"haiku[^\n]*?4\.5[^\n]*?\$[\d.]+[^\n]*?\$\s*([\d.]+)"],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Anthropic",
            name: "Claude Opus 4.1 (Legacy)",
            tag: "Legacy",
            cls: "tag-leg",
            blurb_ja: "旧フラッグシップ / 非推奨",
            blurb_en: "Legacy flagship / deprecated",
            default_in: 15.00,
            default_out: 75.00,
            input_rules: &[],
            output_rules: &[],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Anthropic",
            name: "Claude Haiku 3",
            tag: "Budget",
            cls: "tag-mini",
            blurb_ja: "Claude最安値モデル",
            blurb_en: "Claude lowest-cost model",
            default_in: 0.25,
            default_out: 1.25,
            input_rules: &[],
            output_rules: &[],
            api_keywords: &[],
        },
    ],
};
