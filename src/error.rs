use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration files.
///
/// Platform and pricing files are required, so these errors are expected to
/// abort startup at the call site. The prompt loader catches them per file
/// and continues.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn read_error_display_includes_path() {
        let e = ConfigError::Read {
            path: Path::new("config/platforms/platforms.yaml").to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(
            e.to_string(),
            "Failed to read config/platforms/platforms.yaml: No such file"
        );
    }

    #[test]
    fn yaml_error_display_includes_path() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("a: [1,").unwrap_err();
        let e = ConfigError::Yaml {
            path: Path::new("config/pricing/model-pricing.yaml").to_path_buf(),
            source,
        };
        assert!(
            e.to_string()
                .starts_with("Failed to parse YAML config/pricing/model-pricing.yaml: ")
        );
    }

    #[test]
    fn json_error_display_includes_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = ConfigError::Json {
            path: Path::new("config/prompts/mention-analysis.json").to_path_buf(),
            source,
        };
        assert!(
            e.to_string()
                .starts_with("Failed to parse JSON config/prompts/mention-analysis.json: ")
        );
    }
}
