//! AWS Bedrock pricing source.
//!
//! Uses the AWS Pricing JSON API rather than the marketing page — it is
//! the one vendor with a real (if schema-less) data feed:
//! <https://pricing.us-east-1.amazonaws.com/offers/v1.0/aws/AmazonBedrock/current/index.json>
//!
//! Keyword matching and the us-east-1 tie-break live in the structured
//! extractor; this table only names the models.

use crate::spec::{ApiOfferingSpec, ApiSourceSpec, ContentSource};

pub static SOURCE: ApiSourceSpec = ApiSourceSpec {
    label: "AWS Bedrock",
    source: ContentSource::PricingApi {
        url: "https://pricing.us-east-1.amazonaws.com/offers/v1.0/aws/AmazonBedrock/current/index.json",
    },
    offerings: &[
        ApiOfferingSpec {
            provider: "AWS",
            name: "Amazon Nova Pro",
            tag: "Nova",
            cls: "tag-bal",
            blurb_ja: "マルチモーダル / 300K ctx",
            blurb_en: "Multimodal / 300K ctx",
            default_in: 0.80,
            default_out: 3.20,
            input_rules: &[],
            output_rules: &[],
            api_keywords: &["Nova Pro", "amazon.nova-pro"],
        },
        ApiOfferingSpec {
            provider: "AWS",
            name: "Amazon Nova Micro",
            tag: "Cheapest",
            cls: "tag-mini",
            blurb_ja: "Bedrock最安モデル",
            blurb_en: "Lowest-cost Bedrock model",
            default_in: 0.035,
            default_out: 0.14,
            input_rules: &[],
            output_rules: &[],
            api_keywords: &["Nova Micro", "amazon.nova-micro"],
        },
    ],
};
