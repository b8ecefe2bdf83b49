//! DeepSeek pricing page source.
//!
//! <https://platform.deepseek.com/api-docs/pricing>

use crate::spec::{ApiOfferingSpec, ApiSourceSpec, ContentSource};

pub static SOURCE: ApiSourceSpec = ApiSourceSpec {
    label: "DeepSeek",
    source: ContentSource::RenderedPage {
        url: "https://platform.deepseek.com/api-docs/pricing",
        wait_hint: None,
    },
    offerings: &[
        ApiOfferingSpec {
            provider: "DeepSeek",
            name: "DeepSeek-V3.2",
            tag: "General",
            cls: "tag-oss",
            blurb_ja: "671B MoE / OSS MIT",
            blurb_en: "671B MoE / OSS MIT",
            default_in: 0.27,
            default_out: 1.10,
            input_rules: &[
                r"deepseek[-]?v3\.2[^$]*?\$([\d.]+)",
                r"\$([\d.]+)[^$]*?deepseek[-]?v3\.2",
            ],
            output_rules: &[
                r"deepseek[-]?v3\.2[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?deepseek[-]?v3\.2",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "DeepSeek",
            name: "DeepSeek-R1",
            tag: "Reasoning",
            cls: "tag-oss",
            blurb_ja: "CoT推論 / OSS MIT",
            blurb_en: "Chain-of-thought reasoning / OSS MIT",
            default_in: 0.55,
            default_out: 2.19,
            input_rules: &[
                r"deepseek[-]?r1[^$]*?\$([\d.]+)",
                r"\$([\d.]+)[^$]*?deepseek[-]?r1",
            ],
            output_rules: &[
                r"deepseek[-]?r1[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?deepseek[-]?r1",
            ],
            api_keywords: &[],
        },
    ],
};
