//! Version and identity resolution
//!
//! Turns a [`PluginConfig`] plus an optional version override into the one
//! record every later stage reads from. The override is passed in by the
//! caller, usually taken from `PLUGIN_VERSION`.

use crate::errors::ConfigError;
use crate::plugin_config::{BuildSettings, PluginConfig};
use std::path::{Path, PathBuf};

/// Environment variable the binary reads the version override from
pub const VERSION_ENV_VAR: &str = "PLUGIN_VERSION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Taken from `version` in the plugin configuration
    Config,
    /// Taken from the injected override
    Override,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub value: String,
    pub source: VersionSource,
}

/// Configuration for a single build, with required fields guaranteed present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub author: Option<String>,
    pub homepage: Option<String>,
    pub version: ResolvedVersion,
    pub build: BuildSettings,
}

impl ResolvedConfig {
    /// Name the remote is published under
    pub fn public_name(&self) -> &str {
        &self.name
    }

    /// Display name, falling back to the plugin name
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn version(&self) -> &str {
        &self.version.value
    }

    /// `<out_root>/<name>` as written in the configuration
    pub fn relative_output_dir(&self) -> PathBuf {
        Path::new(&self.build.out_root).join(&self.name)
    }

    /// Output directory anchored at the project root
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.relative_output_dir())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Pick the version embedded in the build.
///
/// A non-empty override always wins, whitespace included. An empty override
/// counts as absent. Returns `None` when neither side supplies a version.
pub fn resolve_version(
    configured: Option<&str>,
    version_override: Option<&str>,
) -> Option<ResolvedVersion> {
    if let Some(value) = non_empty(version_override) {
        return Some(ResolvedVersion {
            value: value.to_string(),
            source: VersionSource::Override,
        });
    }

    non_empty(configured).map(|value| ResolvedVersion {
        value: value.to_string(),
        source: VersionSource::Config,
    })
}

/// Resolve a plugin configuration for one build.
///
/// Fails when `name` is missing or blank, or when no version is available
/// from either the configuration or the override. No default name is ever
/// substituted.
pub fn resolve(
    config: &PluginConfig,
    version_override: Option<&str>,
) -> Result<ResolvedConfig, ConfigError> {
    let name = config
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .ok_or(ConfigError::MissingField("name"))?;

    // The name doubles as a directory under the output root
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(ConfigError::InvalidName(name.to_string()));
    }

    let version = resolve_version(config.version.as_deref(), version_override)
        .ok_or(ConfigError::MissingField("version"))?;

    Ok(ResolvedConfig {
        name: name.to_string(),
        display_name: non_empty(config.display_name.as_deref()).map(str::to_string),
        description: config.description.clone(),
        icon: config.icon.clone(),
        author: config.author.clone(),
        homepage: config.homepage.clone(),
        version,
        build: config.build.clone(),
    })
}
