//! Manifest synthesis
//!
//! A deterministic transform from [`ResolvedConfig`] to manifest text. Optional
//! fields become empty strings and the display name falls back to the plugin
//! name, so every key is always present in the output.

use crate::errors::ManifestError;
use crate::types::{Manifest, OutputLocation};
use fedpack_config::ResolvedConfig;
use std::path::Path;
use std::sync::Arc;

fn or_empty(value: Option<&String>) -> Arc<str> {
    value.map_or_else(|| Arc::from(""), |v| Arc::from(v.as_str()))
}

impl Manifest {
    /// Build the manifest record for a resolved configuration
    pub fn from_resolved(config: &ResolvedConfig) -> Self {
        Manifest {
            name: Arc::from(config.name.as_str()),
            display_name: Arc::from(config.display_name()),
            description: or_empty(config.description.as_ref()),
            version: Arc::from(config.version()),
            icon: or_empty(config.icon.as_ref()),
            author: or_empty(config.author.as_ref()),
            homepage: or_empty(config.homepage.as_ref()),
        }
    }

    /// Serialize as two-space indented JSON without a trailing newline
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl OutputLocation {
    /// `<project_root>/<out_root>/<name>`
    pub fn for_plugin(config: &ResolvedConfig, project_root: &Path) -> Self {
        OutputLocation {
            dir: config.output_dir(project_root),
            display_dir: config.relative_output_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedpack_config::{resolve, PluginConfig};

    fn resolved(config: &PluginConfig, version_override: Option<&str>) -> ResolvedConfig {
        match resolve(config, version_override) {
            Ok(resolved) => resolved,
            Err(e) => panic!("resolution failed: {e}"),
        }
    }

    fn chart_widget() -> PluginConfig {
        PluginConfig {
            name: Some("chart-widget".to_string()),
            version: Some("1.2.0".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_config_defaults() {
        let manifest = Manifest::from_resolved(&resolved(&chart_widget(), None));
        let json = manifest.to_json().unwrap_or_default();

        let expected = serde_json::json!({
            "name": "chart-widget",
            "displayName": "chart-widget",
            "description": "",
            "version": "1.2.0",
            "icon": "",
            "author": "",
            "homepage": ""
        });
        let actual: serde_json::Value = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_exact_text_and_key_order() {
        let manifest = Manifest::from_resolved(&resolved(&chart_widget(), None));
        let json = manifest.to_json().unwrap_or_default();
        let expected = "{\n  \"name\": \"chart-widget\",\n  \"displayName\": \"chart-widget\",\n  \"description\": \"\",\n  \"version\": \"1.2.0\",\n  \"icon\": \"\",\n  \"author\": \"\",\n  \"homepage\": \"\"\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_override_changes_only_version() {
        let base = Manifest::from_resolved(&resolved(&chart_widget(), None));
        let overridden = Manifest::from_resolved(&resolved(&chart_widget(), Some("2.0.0-rc1")));

        assert_eq!(overridden.version.as_ref(), "2.0.0-rc1");
        assert_eq!(
            Manifest {
                version: base.version.clone(),
                ..overridden
            },
            base
        );
    }

    #[test]
    fn test_all_fields_pass_through() {
        let config = PluginConfig {
            display_name: Some("Chart Widget".to_string()),
            description: Some("Draws charts".to_string()),
            icon: Some("chart.svg".to_string()),
            author: Some("Ada".to_string()),
            homepage: Some("https://example.com/chart".to_string()),
            ..chart_widget()
        };
        let manifest = Manifest::from_resolved(&resolved(&config, None));

        assert_eq!(manifest.display_name.as_ref(), "Chart Widget");
        assert_eq!(manifest.description.as_ref(), "Draws charts");
        assert_eq!(manifest.icon.as_ref(), "chart.svg");
        assert_eq!(manifest.author.as_ref(), "Ada");
        assert_eq!(manifest.homepage.as_ref(), "https://example.com/chart");
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let config = resolved(&chart_widget(), Some("3.1.4"));
        let first = Manifest::from_resolved(&config).to_json().unwrap_or_default();
        let second = Manifest::from_resolved(&config).to_json().unwrap_or_default();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_json_fills_missing_optional_fields() {
        let parsed =
            Manifest::from_json(r#"{"name":"a","displayName":"A","version":"1.0.0"}"#);
        assert!(parsed.is_ok_and(|m| m.description.is_empty() && m.homepage.is_empty()));
    }

    #[test]
    fn test_output_location_for_plugin() {
        let location = OutputLocation::for_plugin(
            &resolved(&chart_widget(), None),
            Path::new("/work/plugin"),
        );
        assert_eq!(
            location.manifest_path(),
            Path::new("/work/plugin/dist/chart-widget/manifest.json")
        );
        assert_eq!(
            location.display_manifest_path(),
            Path::new("dist/chart-widget/manifest.json")
        );
    }
}
