//! OpenAI pricing page source.
//!
//! <https://openai.com/api/pricing/>
//!
//! The page interleaves many models; every row keys its rules on the
//! model name so a price can only be attributed to the model it sits
//! next to.

use crate::spec::{ApiOfferingSpec, ApiSourceSpec, ContentSource};

pub static SOURCE: ApiSourceSpec = ApiSourceSpec {
    label: "OpenAI",
    source: ContentSource::RenderedPage {
        url: "https://openai.com/api/pricing/",
        wait_hint: None,
    },
    offerings: &[
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "o3-pro",
            tag: "Reasoning",
            cls: "tag-rsn",
            blurb_ja: "最高品質推論 / Jun 2025",
            blurb_en: "Highest quality reasoning / Jun 2025",
            default_in: 20.00,
            default_out: 80.00,
            input_rules: &[
                r"o3-pro[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"o3-pro[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?o3-pro",
            ],
            output_rules: &[
                r"o3-pro[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?o3-pro",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "o1",
            tag: "Legacy",
            cls: "tag-leg",
            blurb_ja: "旧推論フラッグシップ",
            blurb_en: "Legacy reasoning flagship",
            default_in: 15.00,
            default_out: 60.00,
            input_rules: &[
                r"o1[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"o1[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?o1",
            ],
            output_rules: &[
                r"o1[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?o1",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "o3",
            tag: "Reasoning ↓80%OFF",
            cls: "tag-rsn",
            blurb_ja: "Jun 2025: $10→$2 値下げ",
            blurb_en: "Jun 2025: $10→$2 price cut",
            default_in: 2.00,
            default_out: 8.00,
            input_rules: &[
                r"o3[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"o3[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?o3",
            ],
            output_rules: &[
                r"o3[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?o3",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "o4-mini",
            tag: "Reasoning",
            cls: "tag-rsn",
            blurb_ja: "軽量推論 / 200K ctx",
            blurb_en: "Lightweight reasoning / 200K ctx",
            default_in: 1.10,
            default_out: 4.40,
            input_rules: &[
                r"o4-mini[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"o4-mini[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?o4-mini",
            ],
            output_rules: &[
                r"o4-mini[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?o4-mini",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "GPT-5",
            tag: "Flagship",
            cls: "tag-flag",
            blurb_ja: "SWE-bench最高クラス / 400K",
            blurb_en: "Top SWE-bench / 400K ctx",
            default_in: 1.25,
            default_out: 10.00,
            input_rules: &[
                r"gpt-5[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"gpt-5[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?gpt-5",
            ],
            output_rules: &[
                r"gpt-5[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?gpt-5",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "GPT-4o-latest",
            tag: "Latest",
            cls: "tag-bal",
            blurb_ja: "ChatGPT最新版追跡モデル",
            blurb_en: "Tracks latest ChatGPT version",
            default_in: 5.00,
            default_out: 15.00,
            input_rules: &[
                r"gpt-4o-latest[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"gpt-4o-latest[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?gpt-4o-latest",
            ],
            output_rules: &[
                r"gpt-4o-latest[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?gpt-4o-latest",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "GPT-4o",
            tag: "Stable",
            cls: "tag-bal",
            blurb_ja: "マルチモーダル安定版 / 128K",
            blurb_en: "Multimodal stable / 128K ctx",
            default_in: 2.50,
            default_out: 10.00,
            input_rules: &[
                r"gpt-4o[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"gpt-4o[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?gpt-4o",
            ],
            output_rules: &[
                r"gpt-4o[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?gpt-4o",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "GPT-4.1",
            tag: "New",
            cls: "tag-bal",
            blurb_ja: "1Mコンテキスト / Apr 2025",
            blurb_en: "1M context / Apr 2025",
            default_in: 2.00,
            default_out: 8.00,
            input_rules: &[
                r"gpt-4\.1[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"gpt-4\.1[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?gpt-4\.1",
            ],
            output_rules: &[
                r"gpt-4\.1[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?gpt-4\.1",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "GPT-5 Mini",
            tag: "Balanced",
            cls: "tag-bal",
            blurb_ja: "汎用バランスモデル / 400K",
            blurb_en: "General purpose balanced / 400K",
            default_in: 0.25,
            default_out: 2.00,
            input_rules: &[
                r"gpt-5[-\s]?mini[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"gpt-5[-\s]?mini[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?gpt-5[-\s]?mini",
            ],
            output_rules: &[
                r"gpt-5[-\s]?mini[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?gpt-5[-\s]?mini",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "GPT-4.1 Mini",
            tag: "Mini",
            cls: "tag-mini",
            blurb_ja: "1Mコンテキスト軽量版",
            blurb_en: "1M context lightweight",
            default_in: 0.40,
            default_out: 1.60,
            input_rules: &[
                r"gpt-4\.1[-\s]?mini[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"gpt-4\.1[-\s]?mini[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?gpt-4\.1[-\s]?mini",
            ],
            output_rules: &[
                r"gpt-4\.1[-\s]?mini[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?gpt-4\.1[-\s]?mini",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "GPT-4o Mini",
            tag: "Budget",
            cls: "tag-mini",
            blurb_ja: "コスト重視マルチモーダル",
            blurb_en: "Cost-efficient multimodal",
            default_in: 0.15,
            default_out: 0.60,
            input_rules: &[
                r"gpt-4o[-\s]?mini[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"gpt-4o[-\s]?mini[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?gpt-4o[-\s]?mini",
            ],
            output_rules: &[
                r"gpt-4o[-\s]?mini[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?gpt-4o[-\s]?mini",
            ],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "OpenAI",
            name: "GPT-5 Nano",
            tag: "Budget",
            cls: "tag-mini",
            blurb_ja: "最安クラス / 大量分類向け",
            blurb_en: "Ultra-budget / high-volume classification",
            default_in: 0.05,
            default_out: 0.40,
            input_rules: &[
                r"gpt-5[-\s]?nano[^$]*?\$([\d.]+)\s*/\s*1M.*?input",
                r"gpt-5[-\s]?nano[^$]*?\$([\d.]+)\s*per\s*(?:1M|million).*?input",
                r"input[^$]*?\$([\d.]+)[^$]*?gpt-5[-\s]?nano",
            ],
            output_rules: &[
                r"gpt-5[-\s]?nano[^$]*?output[^$]*?\$([\d.]+)",
                r"output[^$]*?\$([\d.]+)[^$]*?gpt-5[-\s]?nano",
            ],
            api_keywords: &[],
        },
    ],
};
