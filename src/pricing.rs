use std::collections::{BTreeMap, HashMap};
use std::fs;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_AVG_INPUT_TOKENS, DEFAULT_AVG_OUTPUT_TOKENS, FALLBACK_INPUT_PRICE,
    FALLBACK_OUTPUT_PRICE, PRICING_FILE,
};
use crate::error::ConfigError;
use crate::paths::ConfigRoot;

/// Price in USD per 1M tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    pub input: f64,
    pub output: f64,
}

/// Pricing for one provider: per-model overrides plus a default.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderPricing {
    pub display_name: String,
    #[serde(default)]
    pub models: HashMap<String, ModelPricing>,
    pub default: ModelPricing,
}

#[derive(Debug, Deserialize)]
struct PricingFile {
    providers: BTreeMap<String, ProviderPricing>,
}

/// Token counts from one model invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

/// Cost of one invocation, each field rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

/// Input/output halves of an estimate, each rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostSplit {
    pub input: f64,
    pub output: f64,
}

/// Projected cost of running a batch of prompts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PromptEstimate {
    pub per_prompt: f64,
    pub total: f64,
    pub breakdown: CostSplit,
}

/// One provider's display name and default pricing, for catalog views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSummary {
    pub display_name: String,
    pub pricing: ModelPricing,
}

/// Used when the provider is not in the pricing file at all.
const GLOBAL_FALLBACK: ModelPricing = ModelPricing {
    input: FALLBACK_INPUT_PRICE,
    output: FALLBACK_OUTPUT_PRICE,
};

const TOKENS_PER_UNIT: f64 = 1_000_000.0;

/// Round half-up to 4 decimal places. Costs are non-negative, so
/// `f64::round` (half away from zero) matches half-up here.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Per-provider model pricing loaded from `pricing/model-pricing.yaml`.
///
/// Lookups fall through three tiers: exact model match, then the provider's
/// default, then a hardcoded global fallback. Lookups never fail.
#[derive(Debug)]
pub struct PricingBook {
    providers: BTreeMap<String, ProviderPricing>,
}

impl PricingBook {
    /// Load the pricing file. Both a missing file and malformed YAML are
    /// errors; there is no partial-load recovery.
    pub fn load(root: &ConfigRoot) -> Result<Self, ConfigError> {
        let path = root.resolve(PRICING_FILE);
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let file: PricingFile =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml { path, source })?;
        debug!(count = file.providers.len(), "loaded provider pricing");
        Ok(Self {
            providers: file.providers,
        })
    }

    /// Pricing for a provider and optional model, via the three-tier
    /// fallback chain.
    pub fn model_pricing(&self, provider: &str, model: Option<&str>) -> ModelPricing {
        let Some(provider_pricing) = self.providers.get(provider) else {
            return GLOBAL_FALLBACK;
        };

        if let Some(model) = model
            && let Some(pricing) = provider_pricing.models.get(model)
        {
            return *pricing;
        }

        provider_pricing.default
    }

    /// Cost of one invocation. Each field is rounded independently from the
    /// raw values, so `total_cost` is not derived from the rounded halves.
    pub fn calculate_cost(
        &self,
        provider: &str,
        usage: TokenUsage,
        model: Option<&str>,
    ) -> CostBreakdown {
        let pricing = self.model_pricing(provider, model);

        let input_cost = usage.prompt_tokens as f64 / TOKENS_PER_UNIT * pricing.input;
        let output_cost = usage.completion_tokens as f64 / TOKENS_PER_UNIT * pricing.output;

        CostBreakdown {
            input_cost: round4(input_cost),
            output_cost: round4(output_cost),
            total_cost: round4(input_cost + output_cost),
        }
    }

    /// Estimate with the default per-prompt averages (500 in / 1500 out).
    pub fn estimate_prompt_cost(
        &self,
        provider: &str,
        prompt_count: u64,
        model: Option<&str>,
    ) -> PromptEstimate {
        self.estimate_prompt_cost_with(
            provider,
            prompt_count,
            DEFAULT_AVG_INPUT_TOKENS,
            DEFAULT_AVG_OUTPUT_TOKENS,
            model,
        )
    }

    /// Estimate the cost of `prompt_count` prompts at the given average
    /// token counts. Each output field is rounded independently.
    pub fn estimate_prompt_cost_with(
        &self,
        provider: &str,
        prompt_count: u64,
        avg_input_tokens: u64,
        avg_output_tokens: u64,
        model: Option<&str>,
    ) -> PromptEstimate {
        // An empty batch costs nothing, including per-prompt.
        if prompt_count == 0 {
            return PromptEstimate {
                per_prompt: 0.0,
                total: 0.0,
                breakdown: CostSplit {
                    input: 0.0,
                    output: 0.0,
                },
            };
        }

        let pricing = self.model_pricing(provider, model);

        let input_per_prompt = avg_input_tokens as f64 / TOKENS_PER_UNIT * pricing.input;
        let output_per_prompt = avg_output_tokens as f64 / TOKENS_PER_UNIT * pricing.output;
        let per_prompt = input_per_prompt + output_per_prompt;
        let count = prompt_count as f64;

        PromptEstimate {
            per_prompt: round4(per_prompt),
            total: round4(per_prompt * count),
            breakdown: CostSplit {
                input: round4(input_per_prompt * count),
                output: round4(output_per_prompt * count),
            },
        }
    }

    /// Every provider's default pricing, keyed by provider id. Per-model
    /// overrides are deliberately not included; this feeds summary views.
    pub fn all_pricing(&self) -> BTreeMap<String, ProviderSummary> {
        self.providers
            .iter()
            .map(|(id, provider)| {
                (
                    id.clone(),
                    ProviderSummary {
                        display_name: provider.display_name.clone(),
                        pricing: provider.default,
                    },
                )
            })
            .collect()
    }
}
