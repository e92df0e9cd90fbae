use std::env;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::consts::{DEFAULT_CONFIG_DIR, OVERRIDE_CONFIG_DIR};

/// Root directory configuration files are resolved against.
///
/// Each relative path has two candidates, tried in order: the user override
/// under `data/config/` and the shipped default under `config/`. The first
/// candidate that exists wins. If neither exists the last candidate is
/// returned anyway, so the caller's subsequent read reports the missing file.
#[derive(Debug, Clone)]
pub struct ConfigRoot {
    root: PathBuf,
}

impl ConfigRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root rooted at the process working directory, matching the usual
    /// deployment layout.
    pub fn from_cwd() -> io::Result<Self> {
        Ok(Self::new(env::current_dir()?))
    }

    fn candidates(&self, relative: &str) -> [PathBuf; 2] {
        [
            self.root.join(OVERRIDE_CONFIG_DIR).join(relative),
            self.root.join(DEFAULT_CONFIG_DIR).join(relative),
        ]
    }

    /// Resolve a config-relative path to a concrete filesystem path.
    ///
    /// Works for files and directories alike; existence of the result is
    /// only guaranteed when one of the candidates exists.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let [override_path, default_path] = self.candidates(relative);

        if override_path.exists() {
            debug!(path = %override_path.display(), "using override config path");
            return override_path;
        }

        debug!(path = %default_path.display(), "using default config path");
        default_path
    }
}
