//! Configuration loading for AI provider platforms, per-model token pricing,
//! and prompt templates.
//!
//! Files are resolved with a two-tier rule: a user override under
//! `data/config/` is checked before the shipped defaults under `config/`.
//! Platform and pricing files are required and fail the load when missing or
//! malformed; prompt files are loaded best-effort.
//!
//! Everything is loaded once at startup into a [`ConfigSet`] and passed by
//! reference; no store has a mutation API.

mod consts;
mod error;
mod paths;
mod platforms;
mod pricing;
mod prompts;

pub use error::ConfigError;
pub use paths::ConfigRoot;
pub use platforms::{PlatformConfig, PlatformRegistry, PlatformWithId};
pub use pricing::{
    CostBreakdown, CostSplit, ModelPricing, PricingBook, PromptEstimate, ProviderPricing,
    ProviderSummary, TokenUsage,
};
pub use prompts::{PromptConfig, PromptKind, PromptStore, format_prompt};

/// All configuration stores, loaded once and handed down the call graph.
#[derive(Debug)]
pub struct ConfigSet {
    pub platforms: PlatformRegistry,
    pub pricing: PricingBook,
    pub prompts: PromptStore,
}

impl ConfigSet {
    /// Load every store under `root`. Platform and pricing errors propagate;
    /// prompt loading never fails.
    pub fn load(root: &ConfigRoot) -> Result<Self, ConfigError> {
        Ok(Self {
            platforms: PlatformRegistry::load(root)?,
            pricing: PricingBook::load(root)?,
            prompts: PromptStore::load(root),
        })
    }
}
