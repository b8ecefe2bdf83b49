//! Google AI Studio / Vertex AI pricing source.
//!
//! <https://ai.google.dev/pricing>
//!
//! Vertex AI mirrors Google AI pricing with GCP billing on top; its rows
//! are fallback-maintained (no rules) and updated by hand when Google
//! changes the Vertex rate card at
//! <https://cloud.google.com/vertex-ai/generative-ai/pricing>.

use crate::spec::{ApiOfferingSpec, ApiSourceSpec, ContentSource};

pub static SOURCE: ApiSourceSpec = ApiSourceSpec {
    label: "Google AI / Vertex AI",
    source: ContentSource::RenderedPage {
        url: "https://ai.google.dev/pricing",
        wait_hint: None,
    },
    offerings: &[
        ApiOfferingSpec {
            provider: "Google AI",
            name: "Gemini 3.1 Pro Preview",
            tag: "Preview",
            cls: "tag-flag",
            blurb_ja: "最新世代 / 1M ctx",
            blurb_en: "Latest generation / 1M ctx",
            default_in: 2.00,
            default_out: 12.00,
            input_rules: &[
                r"gemini[-\s]?3\.1[-\s]?pro[-\s]?preview[^$]*?\$([\d.]+)\s*/\s*1M",
                r"\$([\d.]+)[^$]*?gemini[-\s]?3\.1[-\s]?pro[-\s]?preview",
            ],
            output_rules: &[r"gemini[-\s]?3\.1[-\s]?pro[-\s]?preview[^$]*?output[^$]*?\$([\d.]+)"],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Google AI",
            name: "Gemini 2.5 Pro",
            tag: "Flagship",
            cls: "tag-flag",
            blurb_ja: "コーディング最強 / 1M ctx",
            blurb_en: "Top coding model / 1M ctx",
            default_in: 1.25,
            default_out: 10.00,
            input_rules: &[
                r"gemini[-\s]?2\.5[-\s]?pro[^$]*?\$([\d.]+)\s*/\s*1M",
                r"\$([\d.]+)[^$]*?gemini[-\s]?2\.5[-\s]?pro",
            ],
            output_rules: &[r"gemini[-\s]?2\.5[-\s]?pro[^$]*?output[^$]*?\$([\d.]+)"],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Google AI",
            name: "Gemini 2.5 Flash",
            tag: "Fast",
            cls: "tag-bal",
            blurb_ja: "バランス高速 / 1M ctx",
            blurb_en: "Balanced & fast / 1M ctx",
            default_in: 0.30,
            default_out: 2.50,
            input_rules: &[
                r"gemini[-\s]?2\.5[-\s]?flash[^$]*?\$([\d.]+)\s*/\s*1M",
                r"\$([\d.]+)[^$]*?gemini[-\s]?2\.5[-\s]?flash",
            ],
            output_rules: &[r"gemini[-\s]?2\.5[-\s]?flash[^$]*?output[^$]*?\$([\d.]+)"],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Google AI",
            name: "Gemini 2.5 Flash-Lite",
            tag: "Budget",
            cls: "tag-mini",
            blurb_ja: "超低コスト / 1M ctx",
            blurb_en: "Ultra low cost / 1M ctx",
            default_in: 0.10,
            default_out: 0.40,
            input_rules: &[
                r"gemini[-\s]?2\.5[-\s]?flash-lite[^$]*?\$([\d.]+)\s*/\s*1M",
                r"\$([\d.]+)[^$]*?gemini[-\s]?2\.5[-\s]?flash-lite",
            ],
            output_rules: &[r"gemini[-\s]?2\.5[-\s]?flash-lite[^$]*?output[^$]*?\$([\d.]+)"],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Vertex AI",
            name: "Gemini 2.5 Pro (Vertex)",
            tag: "GCP Enterprise",
            cls: "tag-vtx",
            blurb_ja: "Google AIと同額 / GCP SLA / ≤200K",
            blurb_en: "Same as Google AI / GCP SLA / ≤200K",
            default_in: 1.25,
            default_out: 10.00,
            input_rules: &[],
            output_rules: &[],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Vertex AI",
            name: "Gemini 2.5 Pro >200K (Vertex)",
            tag: "Long Context",
            cls: "tag-vtx",
            blurb_ja: "200K超コンテキスト / VPC Controls",
            blurb_en: ">200K context / VPC Controls",
            default_in: 2.50,
            default_out: 15.00,
            input_rules: &[],
            output_rules: &[],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Vertex AI",
            name: "Gemini 2.5 Flash (Vertex)",
            tag: "GCP Fast",
            cls: "tag-vtx",
            blurb_ja: "同Google AI料金 / GCP課金 / 1M",
            blurb_en: "Same as Google AI / GCP billing / 1M",
            default_in: 0.30,
            default_out: 2.50,
            input_rules: &[],
            output_rules: &[],
            api_keywords: &[],
        },
        ApiOfferingSpec {
            provider: "Vertex AI",
            name: "Gemini 2.5 Flash-Lite (Vertex)",
            tag: "GCP Budget",
            cls: "tag-vtx",
            blurb_ja: "最安 / GCP無料枠あり / 1M",
            blurb_en: "Lowest cost / GCP free tier / 1M",
            default_in: 0.10,
            default_out: 0.40,
            input_rules: &[],
            output_rules: &[],
            api_keywords: &[],
        },
    ],
};
