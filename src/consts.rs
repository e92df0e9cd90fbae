/// User override configuration directory, checked first (relative to the root).
pub(crate) const OVERRIDE_CONFIG_DIR: &str = "data/config";

/// Shipped default configuration directory.
pub(crate) const DEFAULT_CONFIG_DIR: &str = "config";

/// Platform definitions file, relative to a config directory.
pub(crate) const PLATFORMS_FILE: &str = "platforms/platforms.yaml";

/// Model pricing file, relative to a config directory.
pub(crate) const PRICING_FILE: &str = "pricing/model-pricing.yaml";

/// Subdirectory holding prompt template files.
pub(crate) const PROMPTS_DIR: &str = "prompts";

/// Fallback price per 1M input tokens for providers missing from the config.
pub(crate) const FALLBACK_INPUT_PRICE: f64 = 2.00;

/// Fallback price per 1M output tokens for providers missing from the config.
pub(crate) const FALLBACK_OUTPUT_PRICE: f64 = 10.00;

/// Assumed average input tokens per prompt when estimating costs.
pub(crate) const DEFAULT_AVG_INPUT_TOKENS: u64 = 500;

/// Assumed average output tokens per response when estimating costs.
pub(crate) const DEFAULT_AVG_OUTPUT_TOKENS: u64 = 1500;
