use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::consts::PROMPTS_DIR;
use crate::error::ConfigError;
use crate::paths::ConfigRoot;

/// The logical prompt-template slots and the file stems they load from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Topics,
    Prompts,
    Competitors,
    MentionAnalysis,
}

impl PromptKind {
    pub const ALL: [PromptKind; 4] = [
        PromptKind::Topics,
        PromptKind::Prompts,
        PromptKind::Competitors,
        PromptKind::MentionAnalysis,
    ];

    /// File stem under the prompts directory.
    pub fn file_stem(self) -> &'static str {
        match self {
            PromptKind::Topics => "onboarding-topics",
            PromptKind::Prompts => "onboarding-prompts",
            PromptKind::Competitors => "onboarding-competitors",
            PromptKind::MentionAnalysis => "mention-analysis",
        }
    }

    /// Logical key, as used by callers and in log output.
    pub fn key(self) -> &'static str {
        match self {
            PromptKind::Topics => "topics",
            PromptKind::Prompts => "prompts",
            PromptKind::Competitors => "competitors",
            PromptKind::MentionAnalysis => "mentionAnalysis",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// One prompt template plus its sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    pub user_prompt_template: String,
    pub temperature: f64,
    pub max_output_tokens: u64,
}

/// Prompt templates loaded from the prompts directory.
///
/// Unlike platforms and pricing, loading is best-effort: a missing or
/// unparseable file only skips that slot, so callers must handle `None`
/// from [`PromptStore::get`].
#[derive(Debug, Default)]
pub struct PromptStore {
    configs: HashMap<PromptKind, PromptConfig>,
}

impl PromptStore {
    /// Load every prompt slot that has a readable file. For each slot the
    /// `.yaml` file is tried first, then `.json`.
    pub fn load(root: &ConfigRoot) -> Self {
        let dir = root.resolve(PROMPTS_DIR);
        let mut configs = HashMap::new();

        for kind in PromptKind::ALL {
            match load_slot(&dir, kind) {
                Ok(Some(config)) => {
                    info!(key = kind.key(), "loaded prompt config");
                    configs.insert(kind, config);
                }
                Ok(None) => {
                    warn!(
                        stem = kind.file_stem(),
                        "prompt config file not found, skipping"
                    );
                }
                Err(e) => {
                    error!(stem = kind.file_stem(), "failed to load prompt config: {e}");
                }
            }
        }

        Self { configs }
    }

    pub fn get(&self, kind: PromptKind) -> Option<&PromptConfig> {
        self.configs.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

fn load_slot(dir: &Path, kind: PromptKind) -> Result<Option<PromptConfig>, ConfigError> {
    let yaml_path = dir.join(format!("{}.yaml", kind.file_stem()));
    if yaml_path.exists() {
        let content = fs::read_to_string(&yaml_path).map_err(|source| ConfigError::Read {
            path: yaml_path.clone(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: yaml_path,
            source,
        })?;
        return Ok(Some(config));
    }

    let json_path = dir.join(format!("{}.json", kind.file_stem()));
    if json_path.exists() {
        let content = fs::read_to_string(&json_path).map_err(|source| ConfigError::Read {
            path: json_path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: json_path,
            source,
        })?;
        return Ok(Some(config));
    }

    Ok(None)
}

/// Replace every literal `{{key}}` in `template` with the value's string
/// form. Substitution is global and non-recursive; placeholders with no
/// matching variable are left verbatim, and extra variables are ignored.
pub fn format_prompt<K, V>(template: &str, variables: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: fmt::Display,
{
    let mut formatted = template.to_string();
    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key.as_ref());
        formatted = formatted.replace(&placeholder, &value.to_string());
    }
    formatted
}
