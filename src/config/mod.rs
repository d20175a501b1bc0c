pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_SNIPPETS_DIR: &str = "snippets";
pub const DEFAULT_BOARD: &str = "seeeduino_xiao_ble";
pub const DEFAULT_SHIELD: &str = "MDK rgbled_adapter nice_oled";
pub const DEFAULT_ARTIFACT_PREFIX: &str = "MDK";
pub const DEFAULT_BASE_SNIPPETS: &[&str] = &["zmk-usb-logging", "studio-rpc-usb-uart"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "matrixgen")]
#[command(about = "Generate build.yaml entries for slot module combinations")]
pub struct CliConfig {
    /// Path to the snippets directory
    #[arg(long, default_value = DEFAULT_SNIPPETS_DIR)]
    pub snippets_dir: String,

    /// Board name used in the build matrix
    #[arg(long, default_value = DEFAULT_BOARD)]
    pub board: String,

    /// Shield list used for every entry; separate multiple shields with spaces
    #[arg(long, default_value = DEFAULT_SHIELD)]
    pub shield: String,

    /// Prefix added to the artifact name of each combination
    #[arg(long, default_value = DEFAULT_ARTIFACT_PREFIX)]
    pub artifact_prefix: String,

    /// Base snippet(s) added before every slot snippet; repeat the flag to add more
    #[arg(long = "base-snippet")]
    pub base_snippets: Vec<String>,

    /// Do not append the settings_reset build target
    #[arg(long)]
    pub skip_settings_reset: bool,

    /// Only emit the first N combinations (useful while iterating)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print summary information to stderr instead of the YAML output
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Load matrix parameters from a TOML config file
    #[arg(long)]
    pub config: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fill in the default base snippets when none were passed.
    pub fn normalized(mut self) -> Self {
        if self.base_snippets.is_empty() {
            self.base_snippets = DEFAULT_BASE_SNIPPETS
                .iter()
                .map(|s| s.to_string())
                .collect();
        }
        self
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn snippets_dir(&self) -> &str {
        &self.snippets_dir
    }

    fn board(&self) -> &str {
        &self.board
    }

    fn shield(&self) -> &str {
        &self.shield
    }

    fn artifact_prefix(&self) -> &str {
        &self.artifact_prefix
    }

    fn base_snippets(&self) -> &[String] {
        &self.base_snippets
    }

    fn settings_reset(&self) -> bool {
        !self.skip_settings_reset
    }

    fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("snippets_dir", &self.snippets_dir)?;
        validation::validate_non_empty_string("board", &self.board)?;
        validation::validate_non_empty_string("shield", &self.shield)?;
        validation::validate_non_empty_string("artifact_prefix", &self.artifact_prefix)?;
        validation::validate_no_inner_whitespace("artifact_prefix", &self.artifact_prefix)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from(["matrixgen"]).normalized()
    }

    #[test]
    fn test_defaults_match_the_original_tool() {
        let config = base_config();
        assert_eq!(config.board, DEFAULT_BOARD);
        assert_eq!(config.shield, DEFAULT_SHIELD);
        assert_eq!(config.artifact_prefix, DEFAULT_ARTIFACT_PREFIX);
        assert_eq!(
            config.base_snippets,
            vec!["zmk-usb-logging", "studio-rpc-usb-uart"]
        );
        assert!(config.settings_reset());
        assert!(config.limit.is_none());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_repeated_base_snippet_flag_overrides_defaults() {
        let config = CliConfig::parse_from([
            "matrixgen",
            "--base-snippet",
            "one",
            "--base-snippet",
            "two",
        ])
        .normalized();
        assert_eq!(config.base_snippets, vec!["one", "two"]);
    }

    #[test]
    fn test_skip_settings_reset_flag() {
        let config = CliConfig::parse_from(["matrixgen", "--skip-settings-reset"]).normalized();
        assert!(!config.settings_reset());
    }

    #[test]
    fn test_validate_rejects_empty_board() {
        let mut config = base_config();
        config.board = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_whitespace_prefix() {
        let mut config = base_config();
        config.artifact_prefix = "MDK v2".to_string();
        assert!(config.validate().is_err());
    }
}
