use crate::logger;
use crate::GlobalOpts;
use anyhow::{bail, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::Path;

const FALLBACK_NAME: &str = "my-plugin";

const PLUGIN_TEMPLATE: &str = r#"# fedpack plugin configuration
#
# `name` is the public name of the remote and the output directory
# under `build.out_root`. Hosts discover the plugin by it, so keep it stable.
name = __NAME__
display_name = __NAME__
description = ""
version = "0.1.0"
# icon = "icon.svg"
# author = ""
# homepage = ""

# Bundler settings. The exposed module is always published as "./Plugin".
[build]
out_root = "dist"
entry = "./src/Plugin.vue"
shared = ["vue"]
target = "esnext"
minify = false
css_code_split = false
"#;

#[derive(Parser, Debug)]
pub struct InitCommand {
    /// Plugin name (default: the project directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Render the template with a TOML-quoted plugin name
pub fn render_template(name: &str) -> String {
    let quoted = toml::Value::String(name.to_string()).to_string();
    PLUGIN_TEMPLATE.replace("__NAME__", &quoted)
}

fn default_name(target_path: &Path) -> String {
    let dir = match target_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::canonicalize(parent).ok(),
        _ => std::env::current_dir().ok(),
    };
    dir.and_then(|d| d.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Initialize a new plugin configuration file
pub fn handle_init(cmd: InitCommand, opts: &GlobalOpts) -> Result<()> {
    logger::debug("Handling init command");

    let target_path = opts.config_path();
    logger::debug(&format!("Target file: {}", target_path.display()));

    if target_path.exists() && !cmd.force {
        bail!(
            "File '{}' already exists. Use --force to overwrite it.",
            target_path.display()
        );
    }

    let name = cmd.name.unwrap_or_else(|| default_name(&target_path));
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&target_path, render_template(&name))?;

    logger::success(&format!(
        "Created plugin configuration: {}",
        target_path.display()
    ));
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit {} with your plugin metadata",
        target_path.display().to_string().bold()
    );
    println!("  2. Preview the manifest: fedpack manifest");
    println!("  3. Build: fedpack build -- <bundler command>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedpack_config::{resolve, PluginConfig};

    #[test]
    fn test_template_parses_and_resolves() {
        let config = PluginConfig::from_toml_str(&render_template("chart-widget"));
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.name.as_deref(), Some("chart-widget"));
        assert_eq!(config.build.entry, "./src/Plugin.vue");
        assert!(resolve(&config, None).is_ok());
    }

    #[test]
    fn test_template_quotes_name() {
        let config = PluginConfig::from_toml_str(&render_template("odd \"name\"")).unwrap_or_default();
        assert_eq!(config.name.as_deref(), Some("odd \"name\""));
    }

    #[test]
    fn test_template_contains_build_table() {
        assert!(PLUGIN_TEMPLATE.contains("[build]"));
    }
}
