use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RelkitError, Result};

/// Represents the complete configuration for relkit.
///
/// Contains version derivation settings, report rewriting settings, and
/// recipe publishing settings.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub recipes: RecipesConfig,
}

/// Returns the default tag prefix stripped from release tags.
fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Returns the default prefix for pull-request build versions.
fn default_pr_version_prefix() -> String {
    "pr-".to_string()
}

/// Returns the sentinel chart version used for non-release builds.
fn default_dev_chart_version() -> String {
    "0.42.42-dev".to_string()
}

/// Returns the version and channel label used for untagged builds.
fn default_edge_label() -> String {
    "edge".to_string()
}

/// Configuration for release version derivation.
///
/// Controls how git references are translated into release version,
/// channel, and chart version labels.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default = "default_pr_version_prefix")]
    pub pr_version_prefix: String,

    #[serde(default = "default_dev_chart_version")]
    pub dev_chart_version: String,

    #[serde(default = "default_edge_label")]
    pub edge_label: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            tag_prefix: default_tag_prefix(),
            pr_version_prefix: default_pr_version_prefix(),
            dev_chart_version: default_dev_chart_version(),
            edge_label: default_edge_label(),
        }
    }
}

/// Configuration for test-report rewriting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReportConfig {
    /// Path prefix stripped from file attributes when no --prefix is given
    #[serde(default)]
    pub strip_prefix: Option<String>,
}

fn default_namespace() -> String {
    "default".to_string()
}

fn default_configmap() -> String {
    "test-recipes".to_string()
}

/// Configuration for recipe bundle publishing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RecipesConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_configmap")]
    pub configmap: String,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        RecipesConfig {
            namespace: default_namespace(),
            configmap: default_configmap(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: VersionConfig::default(),
            report: ReportConfig::default(),
            recipes: RecipesConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relkit.toml` in current directory
/// 3. `~/.config/.relkit.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./relkit.toml").exists() {
        fs::read_to_string("./relkit.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".relkit.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| RelkitError::config(format!("Cannot parse configuration: {}", e)))?;
    Ok(config)
}
