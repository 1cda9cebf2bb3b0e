//! Author-provided plugin metadata and build settings
//!
//! The configuration lives in `plugin.toml` next to the plugin sources:
//!
//! ```toml
//! name = "chart-widget"
//! display_name = "Chart Widget"
//! version = "1.2.0"
//!
//! [build]
//! entry = "./src/Plugin.vue"
//! ```
//!
//! Every field is optional at parse time. Required fields are enforced by
//! [`crate::resolver::resolve`] so the error can name what is missing.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "plugin.toml";

/// Environment variable naming an alternate configuration file
pub const CONFIG_ENV_VAR: &str = "FEDPACK_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default)]
    pub build: BuildSettings,
}

/// Settings forwarded to the bundler declaration
///
/// Defaults match a Vue component built as an unminified ES module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BuildSettings {
    /// Root of the build output; the plugin lands in `<out_root>/<name>`
    pub out_root: String,
    /// Local source module published under the fixed exposure key
    pub entry: String,
    /// Libraries the host provides and the remote must not bundle
    pub shared: Vec<String>,
    pub target: String,
    pub minify: bool,
    pub css_code_split: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        BuildSettings {
            out_root: "dist".to_string(),
            entry: "./src/Plugin.vue".to_string(),
            shared: vec!["vue".to_string()],
            target: "esnext".to_string(),
            minify: false,
            css_code_split: false,
        }
    }
}

impl PluginConfig {
    /// Resolve which configuration file to read.
    ///
    /// An explicit path wins, then a non-empty `FEDPACK_CONFIG`, then
    /// `plugin.toml` in the working directory.
    pub fn path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Load the configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
