//! CLI configuration and settings management

use crate::{CliError, Result};
use rj_core::pretty::PrettyOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "rj.toml";

/// CLI configuration loaded from config files
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output formatting settings
    pub formatting: FormattingConfig,

    /// Translation settings
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Indent size of the generated source
    pub indent_size: usize,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self { indent_size: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Class name used when neither `--name` nor the input file name gives one
    pub default_name: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            default_name: "Program".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from the given file, or from the first standard
    /// location that has one, falling back to defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from_file(local);
        }

        if let Some(user_config) = Self::default_config_path() {
            if user_config.is_file() {
                return Self::load_from_file(&user_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CliError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get the default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rj").join("config.toml"))
    }

    pub fn pretty_options(&self) -> PrettyOptions {
        PrettyOptions::with_indent(self.formatting.indent_size)
    }
}
