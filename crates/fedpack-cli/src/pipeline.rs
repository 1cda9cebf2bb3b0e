//! Two-phase packaging pipeline
//!
//! A run resolves the configuration once, then exposes two phases:
//! - [`Pipeline::build`] returns the declaration the bundler packages from
//! - [`Pipeline::finalize`] writes the manifest and must only be called after
//!   the bundler has flushed all of its output
//!
//! Configuration errors surface from the constructors, before either phase
//! can run, so a misnamed artifact is never produced.

use crate::common::GlobalOpts;
use crate::errors::PipelineError;
use fedpack_config::{resolve, PluginConfig, ResolvedConfig};
use fedpack_manifest::{
    declare, write_manifest, BundleConfig, Manifest, OutputLocation, WriteOutcome,
};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Pipeline {
    resolved: ResolvedConfig,
    project_root: PathBuf,
}

impl Pipeline {
    /// Resolve a configuration already in memory
    pub fn from_config(
        config: &PluginConfig,
        version_override: Option<&str>,
        project_root: impl Into<PathBuf>,
    ) -> Result<Self, PipelineError> {
        let resolved = resolve(config, version_override)?;
        debug!(
            "Resolved plugin '{}' version {} ({:?})",
            resolved.name, resolved.version.value, resolved.version.source
        );
        Ok(Pipeline {
            resolved,
            project_root: project_root.into(),
        })
    }

    /// Load and resolve the configuration named by the global options.
    ///
    /// Output paths are anchored at the directory holding the config file.
    pub fn load(opts: &GlobalOpts) -> Result<Self, PipelineError> {
        let config_path = opts.config_path();
        debug!("Loading plugin configuration from {:?}", config_path);
        let config = PluginConfig::load_from_path(&config_path)?;
        Self::from_config(
            &config,
            opts.version_override.as_deref(),
            project_root_of(&config_path),
        )
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Build phase: the declaration handed to the bundler
    pub fn build(&self) -> BundleConfig {
        declare(&self.resolved)
    }

    pub fn manifest(&self) -> Manifest {
        Manifest::from_resolved(&self.resolved)
    }

    pub fn output_location(&self) -> OutputLocation {
        OutputLocation::for_plugin(&self.resolved, &self.project_root)
    }

    /// Finalize phase: write `manifest.json` beside the bundle.
    ///
    /// Filesystem failures come back as [`WriteOutcome::Failed`]. The write is
    /// attempted exactly once.
    pub fn finalize(&self) -> Result<WriteOutcome, PipelineError> {
        let text = self.manifest().to_json()?;
        Ok(write_manifest(&text, &self.output_location()))
    }
}

fn project_root_of(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedpack_config::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    fn chart_widget() -> PluginConfig {
        PluginConfig {
            name: Some("chart-widget".to_string()),
            version: Some("1.2.0".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_project_root_of() {
        assert_eq!(project_root_of(Path::new("plugin.toml")), PathBuf::from("."));
        assert_eq!(
            project_root_of(Path::new("widgets/chart/plugin.toml")),
            PathBuf::from("widgets/chart")
        );
    }

    #[test]
    fn test_finalize_creates_output_directory() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Ok(pipeline) = Pipeline::from_config(&chart_widget(), None, temp_dir.path()) else {
            panic!("pipeline should resolve");
        };
        let out_dir = temp_dir.path().join("dist").join("chart-widget");
        assert!(!out_dir.exists());

        let outcome = pipeline.finalize();
        assert!(outcome.is_ok_and(|o| o.is_written()));
        assert!(out_dir.join("manifest.json").is_file());
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let Ok(pipeline) =
            Pipeline::from_config(&chart_widget(), Some("2.0.0-rc1"), temp_dir.path())
        else {
            panic!("pipeline should resolve");
        };
        let path = pipeline.output_location().manifest_path();

        assert!(pipeline.finalize().is_ok());
        let first = fs::read(&path).unwrap_or_default();
        assert!(pipeline.finalize().is_ok());
        let second = fs::read(&path).unwrap_or_default();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_name_stops_before_output() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let config = PluginConfig {
            name: None,
            ..chart_widget()
        };
        let result = Pipeline::from_config(&config, None, temp_dir.path());
        assert!(matches!(
            result,
            Err(PipelineError::Config(ConfigError::MissingField("name")))
        ));
        assert!(!temp_dir.path().join("dist").exists());
    }

    #[test]
    fn test_build_phase_uses_resolved_identity() {
        let Ok(pipeline) = Pipeline::from_config(&chart_widget(), Some("9.9.9"), ".") else {
            panic!("pipeline should resolve");
        };
        let bundle = pipeline.build();
        assert_eq!(bundle.federation.name.as_ref(), "chart-widget");
        assert_eq!(
            bundle.define.get("__PLUGIN_VERSION__").map(|v| v.as_ref()),
            Some("\"9.9.9\"")
        );
    }

    #[test]
    fn test_load_anchors_output_at_config_dir() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let config_path = temp_dir.path().join("plugin.toml");
        assert!(fs::write(&config_path, "name = \"chart-widget\"\nversion = \"1.2.0\"\n").is_ok());

        let opts = GlobalOpts {
            config: Some(config_path),
            ..Default::default()
        };
        let Ok(pipeline) = Pipeline::load(&opts) else {
            panic!("pipeline should load");
        };
        assert_eq!(
            pipeline.output_location().manifest_path(),
            temp_dir.path().join("dist/chart-widget/manifest.json")
        );
    }
}
