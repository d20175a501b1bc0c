use crate::config::{
    DEFAULT_ARTIFACT_PREFIX, DEFAULT_BASE_SNIPPETS, DEFAULT_BOARD, DEFAULT_SHIELD,
    DEFAULT_SNIPPETS_DIR,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Matrix parameters loaded from a TOML file (`--config`). Every field is
/// optional and falls back to the same defaults as the CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub matrix: MatrixSection,
    #[serde(default)]
    pub discovery: DiscoverySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixSection {
    #[serde(default = "default_board")]
    pub board: String,
    #[serde(default = "default_shield")]
    pub shield: String,
    #[serde(default = "default_artifact_prefix")]
    pub artifact_prefix: String,
    #[serde(default = "default_base_snippets")]
    pub base_snippets: Vec<String>,
    #[serde(default = "default_settings_reset")]
    pub settings_reset: bool,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverySection {
    #[serde(default = "default_snippets_dir")]
    pub snippets_dir: String,
}

fn default_board() -> String {
    DEFAULT_BOARD.to_string()
}

fn default_shield() -> String {
    DEFAULT_SHIELD.to_string()
}

fn default_artifact_prefix() -> String {
    DEFAULT_ARTIFACT_PREFIX.to_string()
}

fn default_base_snippets() -> Vec<String> {
    DEFAULT_BASE_SNIPPETS.iter().map(|s| s.to_string()).collect()
}

fn default_settings_reset() -> bool {
    true
}

fn default_snippets_dir() -> String {
    DEFAULT_SNIPPETS_DIR.to_string()
}

impl Default for MatrixSection {
    fn default() -> Self {
        Self {
            board: default_board(),
            shield: default_shield(),
            artifact_prefix: default_artifact_prefix(),
            base_snippets: default_base_snippets(),
            settings_reset: default_settings_reset(),
            limit: None,
        }
    }
}

impl Default for DiscoverySection {
    fn default() -> Self {
        Self {
            snippets_dir: default_snippets_dir(),
        }
    }
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn snippets_dir(&self) -> &str {
        &self.discovery.snippets_dir
    }

    fn board(&self) -> &str {
        &self.matrix.board
    }

    fn shield(&self) -> &str {
        &self.matrix.shield
    }

    fn artifact_prefix(&self) -> &str {
        &self.matrix.artifact_prefix
    }

    fn base_snippets(&self) -> &[String] {
        &self.matrix.base_snippets
    }

    fn settings_reset(&self) -> bool {
        self.matrix.settings_reset
    }

    fn limit(&self) -> Option<usize> {
        self.matrix.limit
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("discovery.snippets_dir", &self.discovery.snippets_dir)?;
        validation::validate_non_empty_string("matrix.board", &self.matrix.board)?;
        validation::validate_non_empty_string("matrix.shield", &self.matrix.shield)?;
        validation::validate_non_empty_string("matrix.artifact_prefix", &self.matrix.artifact_prefix)?;
        validation::validate_no_inner_whitespace("matrix.artifact_prefix", &self.matrix.artifact_prefix)?;
        Ok(())
    }
}
