use std::collections::HashMap;
use std::fs;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::PLATFORMS_FILE;
use crate::error::ConfigError;
use crate::paths::ConfigRoot;

/// One platform entry: a display name bound to a provider and model choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub name: String,
    pub provider: String,
    pub model: String,
}

/// A platform config together with the id it is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformWithId {
    pub id: String,
    #[serde(flatten)]
    pub config: PlatformConfig,
}

#[derive(Debug, Deserialize)]
struct PlatformsFile {
    platforms: IndexMap<String, PlatformConfig>,
}

/// Platform definitions loaded from `platforms/platforms.yaml`, indexed by
/// id, provider, and name.
///
/// Ids are unique by construction (map keys). Provider and name are not;
/// on duplicates the entry appearing later in the file wins in the derived
/// indexes.
#[derive(Debug)]
pub struct PlatformRegistry {
    platforms: IndexMap<String, PlatformConfig>,
    by_provider: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl PlatformRegistry {
    /// Load the platform file. Both a missing file and malformed YAML are
    /// errors; there is no partial-load recovery.
    pub fn load(root: &ConfigRoot) -> Result<Self, ConfigError> {
        let path = root.resolve(PLATFORMS_FILE);
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let file: PlatformsFile =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml { path, source })?;
        debug!(count = file.platforms.len(), "loaded platform definitions");
        Ok(Self::from_map(file.platforms))
    }

    fn from_map(platforms: IndexMap<String, PlatformConfig>) -> Self {
        let mut by_provider = HashMap::new();
        let mut by_name = HashMap::new();
        for (id, config) in &platforms {
            by_provider.insert(config.provider.clone(), id.clone());
            by_name.insert(config.name.clone(), id.clone());
        }
        Self {
            platforms,
            by_provider,
            by_name,
        }
    }

    pub fn get(&self, id: &str) -> Option<&PlatformConfig> {
        self.platforms.get(id)
    }

    pub fn with_id(&self, id: &str) -> Option<PlatformWithId> {
        self.platforms.get(id).map(|config| PlatformWithId {
            id: id.to_string(),
            config: config.clone(),
        })
    }

    pub fn by_provider(&self, provider: &str) -> Option<&PlatformConfig> {
        self.by_provider
            .get(provider)
            .and_then(|id| self.platforms.get(id))
    }

    pub fn by_name(&self, name: &str) -> Option<&PlatformConfig> {
        self.by_name
            .get(name)
            .and_then(|id| self.platforms.get(id))
    }

    /// All platforms in file order.
    pub fn all(&self) -> Vec<PlatformWithId> {
        self.platforms
            .iter()
            .map(|(id, config)| PlatformWithId {
                id: id.clone(),
                config: config.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(name: &str, provider: &str, model: &str) -> PlatformConfig {
        PlatformConfig {
            name: name.to_string(),
            provider: provider.to_string(),
            model: model.to_string(),
        }
    }

    fn sample_registry() -> PlatformRegistry {
        let mut platforms = IndexMap::new();
        platforms.insert(
            "chatgpt".to_string(),
            platform("ChatGPT", "openai", "gpt-4o"),
        );
        platforms.insert(
            "claude".to_string(),
            platform("Claude", "anthropic", "claude-sonnet-4"),
        );
        PlatformRegistry::from_map(platforms)
    }

    #[test]
    fn get_by_id() {
        let registry = sample_registry();
        assert_eq!(registry.get("chatgpt").unwrap().provider, "openai");
        assert!(registry.get("gemini").is_none());
    }

    #[test]
    fn with_id_carries_id() {
        let registry = sample_registry();
        let p = registry.with_id("claude").unwrap();
        assert_eq!(p.id, "claude");
        assert_eq!(p.config.model, "claude-sonnet-4");
        assert!(registry.with_id("missing").is_none());
    }

    #[test]
    fn lookup_by_provider_and_name() {
        let registry = sample_registry();
        assert_eq!(registry.by_provider("anthropic").unwrap().name, "Claude");
        assert_eq!(registry.by_name("ChatGPT").unwrap().model, "gpt-4o");
        assert!(registry.by_provider("google").is_none());
        assert!(registry.by_name("Gemini").is_none());
    }

    #[test]
    fn duplicate_provider_last_entry_wins() {
        let mut platforms = IndexMap::new();
        platforms.insert(
            "gpt4o".to_string(),
            platform("GPT-4o", "openai", "gpt-4o"),
        );
        platforms.insert(
            "gpt4o-mini".to_string(),
            platform("GPT-4o mini", "openai", "gpt-4o-mini"),
        );
        let registry = PlatformRegistry::from_map(platforms);

        assert_eq!(registry.by_provider("openai").unwrap().model, "gpt-4o-mini");
    }

    #[test]
    fn all_preserves_file_order() {
        let registry = sample_registry();
        let ids: Vec<_> = registry.all().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["chatgpt", "claude"]);
    }

    #[test]
    fn parses_platforms_yaml() {
        let yaml = r#"
platforms:
  chatgpt:
    name: ChatGPT
    provider: openai
    model: gpt-4o
"#;
        let file: PlatformsFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.platforms["chatgpt"].name, "ChatGPT");
    }
}
