//! Plugin configuration for fedpack
//!
//! This crate owns the author-provided plugin metadata (`plugin.toml`) and the
//! rules that turn it into a single resolved record for one build:
//! - loading and parsing the configuration file
//! - build settings with defaults for the bundler declaration
//! - version resolution against an injected override
//!
//! Nothing here reads the process environment for the version. Callers pass
//! the override in so resolution stays a pure function of its inputs.

pub mod errors;
pub mod plugin_config;
pub mod resolver;

pub use errors::ConfigError;
pub use plugin_config::{BuildSettings, PluginConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use resolver::{
    resolve, resolve_version, ResolvedConfig, ResolvedVersion, VersionSource, VERSION_ENV_VAR,
};
