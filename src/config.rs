use crate::errors::{GoifaceError, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = ".goiface.toml";

/// Configuration loaded from `.goiface.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// File-discovery configuration.
///
/// `respect_gitignore` defaults to true via custom `Default`
/// implementation: gitignored files are usually generated and not worth
/// cataloging, but a project that gitignores checked-in generated Go
/// sources can turn the filter off.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Extra exclude glob patterns, merged with the built-in conventions.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Scan `*_test.go` files too.
    #[serde(default)]
    pub include_tests: bool,
    /// Scan `main.go` files too.
    #[serde(default)]
    pub include_entrypoints: bool,
    /// Honor `.gitignore` files during the walk.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            include_tests: false,
            include_entrypoints: false,
            respect_gitignore: true,
        }
    }
}

/// Extraction configuration.
///
/// `balanced_braces` defaults to true via custom `Default` implementation:
/// interface bodies are skipped with a brace-depth counter, so a nested `}`
/// inside an embedded interface does not truncate the match. Setting it to
/// false restores the flat to-first-`}` behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    #[serde(default = "default_true")]
    pub balanced_braces: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            balanced_braces: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            GoifaceError::Config(format!("Could not read config file: {}", path.display()))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| GoifaceError::Config(format!("Invalid config file: {e}")))?;
        Ok(config)
    }

    /// Try to find `.goiface.toml` by walking up from the given directory.
    ///
    /// A missing file is `Ok(None)` and callers fall back to defaults. A
    /// file that exists but cannot be read or parsed is an error: silently
    /// running with defaults would discard the user's settings.
    pub fn find_and_load(start: &Path) -> Result<Option<Self>> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load(&config_path).map(Some);
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }
}
