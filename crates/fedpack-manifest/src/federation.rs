//! Federation declaration for the bundler
//!
//! The plugin is published as a remote under its configured name with a single
//! exposed module. The exposure key never changes, so hosts can keep importing
//! `./Plugin` no matter how the plugin's sources are laid out.

use crate::errors::ManifestError;
use fedpack_config::ResolvedConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// File name of the remote entry the host loads first
pub const REMOTE_ENTRY_FILENAME: &str = "remoteEntry.js";

/// Logical module path hosts import from the remote
pub const EXPOSED_MODULE: &str = "./Plugin";

/// Compile-time constant carrying the resolved version
pub const DEFINE_VERSION: &str = "__PLUGIN_VERSION__";

/// Compile-time constant carrying the resolved display name
pub const DEFINE_NAME: &str = "__PLUGIN_NAME__";

/// Everything the bundler needs to package the plugin as a remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    pub federation: FederationConfig,
    /// Identifiers replaced with JSON literals in the component source
    pub define: BTreeMap<Arc<str>, Arc<str>>,
    pub build: BuildOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederationConfig {
    pub name: Arc<str>,
    pub filename: Arc<str>,
    pub exposes: BTreeMap<Arc<str>, Arc<str>>,
    pub shared: SmallVec<[Arc<str>; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    pub target: Arc<str>,
    pub minify: bool,
    pub css_code_split: bool,
    pub out_dir: Arc<str>,
    pub assets_dir: Arc<str>,
}

fn json_literal(value: &str) -> Arc<str> {
    Arc::from(Value::String(value.to_string()).to_string())
}

/// Declare the bundle configuration for a resolved plugin
pub fn declare(config: &ResolvedConfig) -> BundleConfig {
    let mut exposes: BTreeMap<Arc<str>, Arc<str>> = BTreeMap::new();
    exposes.insert(
        Arc::from(EXPOSED_MODULE),
        Arc::from(config.build.entry.as_str()),
    );

    let shared: SmallVec<[Arc<str>; 2]> = config
        .build
        .shared
        .iter()
        .map(|dep| Arc::from(dep.as_str()))
        .collect();

    let mut define: BTreeMap<Arc<str>, Arc<str>> = BTreeMap::new();
    define.insert(Arc::from(DEFINE_VERSION), json_literal(config.version()));
    define.insert(Arc::from(DEFINE_NAME), json_literal(config.display_name()));

    // Bundler paths always use forward slashes
    let out_dir = format!("{}/{}", config.build.out_root.trim_end_matches('/'), config.name);

    debug!(
        "Declaring remote '{}' exposing {} -> {}",
        config.public_name(),
        EXPOSED_MODULE,
        config.build.entry
    );

    BundleConfig {
        federation: FederationConfig {
            name: Arc::from(config.public_name()),
            filename: Arc::from(REMOTE_ENTRY_FILENAME),
            exposes,
            shared,
        },
        define,
        build: BuildOptions {
            target: Arc::from(config.build.target.as_str()),
            minify: config.build.minify,
            css_code_split: config.build.css_code_split,
            out_dir: Arc::from(out_dir),
            assets_dir: Arc::from(""),
        },
    }
}

impl BundleConfig {
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedpack_config::{resolve, BuildSettings, PluginConfig};

    fn resolved(config: &PluginConfig) -> ResolvedConfig {
        match resolve(config, None) {
            Ok(resolved) => resolved,
            Err(e) => panic!("resolution failed: {e}"),
        }
    }

    fn chart_widget() -> PluginConfig {
        PluginConfig {
            name: Some("chart-widget".to_string()),
            display_name: Some("Chart \"Widget\"".to_string()),
            version: Some("1.2.0".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_declaration() {
        let bundle = declare(&resolved(&chart_widget()));

        assert_eq!(bundle.federation.name.as_ref(), "chart-widget");
        assert_eq!(bundle.federation.filename.as_ref(), "remoteEntry.js");
        assert_eq!(bundle.federation.exposes.len(), 1);
        assert_eq!(
            bundle.federation.exposes.get("./Plugin").map(|e| e.as_ref()),
            Some("./src/Plugin.vue")
        );
        let shared: Vec<&str> = bundle.federation.shared.iter().map(|s| s.as_ref()).collect();
        assert_eq!(shared, vec!["vue"]);
        assert_eq!(bundle.build.out_dir.as_ref(), "dist/chart-widget");
        assert_eq!(bundle.build.target.as_ref(), "esnext");
        assert!(bundle.build.assets_dir.is_empty());
    }

    #[test]
    fn test_exposure_key_is_stable_across_entries() {
        let mut config = chart_widget();
        config.build = BuildSettings {
            entry: "./src/components/NewName.vue".to_string(),
            ..Default::default()
        };
        let bundle = declare(&resolved(&config));
        let keys: Vec<&str> = bundle.federation.exposes.keys().map(|k| k.as_ref()).collect();
        assert_eq!(keys, vec!["./Plugin"]);
    }

    #[test]
    fn test_define_values_are_json_literals() {
        let bundle = declare(&resolved(&chart_widget()));
        assert_eq!(
            bundle.define.get(DEFINE_VERSION).map(|v| v.as_ref()),
            Some("\"1.2.0\"")
        );
        assert_eq!(
            bundle.define.get(DEFINE_NAME).map(|v| v.as_ref()),
            Some(r#""Chart \"Widget\"""#)
        );
    }

    #[test]
    fn test_define_name_falls_back_to_plugin_name() {
        let config = PluginConfig {
            display_name: None,
            ..chart_widget()
        };
        let bundle = declare(&resolved(&config));
        assert_eq!(
            bundle.define.get(DEFINE_NAME).map(|v| v.as_ref()),
            Some("\"chart-widget\"")
        );
    }

    #[test]
    fn test_json_uses_bundler_key_names() {
        let json = declare(&resolved(&chart_widget()))
            .to_json()
            .unwrap_or_default();
        assert!(json.contains("\"cssCodeSplit\": false"));
        assert!(json.contains("\"outDir\": \"dist/chart-widget\""));
        assert!(json.contains("\"assetsDir\": \"\""));
        assert!(json.contains("\"filename\": \"remoteEntry.js\""));
    }
}
