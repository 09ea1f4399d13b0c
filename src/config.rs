//! Configuration management for change validation.
//!
//! Handles:
//! - Loading `.change-validators.toml` from a project directory
//! - Falling back to the user config directory
//! - Selecting which validators are disabled

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project directory
pub const PROJECT_CONFIG_FILE: &str = ".change-validators.toml";

/// Directory and file name looked up under the user config directory
pub const USER_CONFIG_DIR: &str = "change-validators";
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Adapter the validated elements belong to; changes to other adapters' elements are skipped
    pub adapter: String,
    /// Validators that must not run
    pub disabled_validators: Vec<String>,
    /// Where the configuration was loaded from, `None` for defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adapter: "zendesk".to_string(),
            disabled_validators: Vec::new(),
            source: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse change validator config")
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Find configuration for a project.
    ///
    /// The project file wins over the user config directory; defaults are used
    /// when neither exists.
    pub fn discover(project_dir: &Path) -> Result<Self> {
        Self::discover_in(project_dir, dirs::config_dir().as_deref())
    }

    /// Like [`Config::discover`], with an explicit user config directory
    pub fn discover_in(project_dir: &Path, user_config_dir: Option<&Path>) -> Result<Self> {
        for candidate in Self::candidate_paths_in(project_dir, user_config_dir) {
            if candidate.is_file() {
                log::debug!("Loading change validator config from {:?}", candidate);
                return Self::from_file(&candidate);
            }
        }

        log::debug!("No change validator config found, using defaults");
        Ok(Self::default())
    }

    /// Paths searched by [`Config::discover`], highest priority first
    pub fn candidate_paths(project_dir: &Path) -> Vec<PathBuf> {
        Self::candidate_paths_in(project_dir, dirs::config_dir().as_deref())
    }

    fn candidate_paths_in(project_dir: &Path, user_config_dir: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = vec![project_dir.join(PROJECT_CONFIG_FILE)];

        if let Some(config_dir) = user_config_dir {
            paths.push(config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE));
        }

        paths
    }

    /// Whether the named validator is disabled by this configuration
    pub fn is_disabled(&self, validator: &str) -> bool {
        self.disabled_validators.iter().any(|name| name == validator)
    }
}
