//! Common types and utilities shared across modules

use clap::Parser;
use fedpack_config::PluginConfig;
use std::path::PathBuf;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    #[arg(short, long, global = true, help = "Decrease verbosity")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug, -vv for trace)")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Plugin configuration file (default: $FEDPACK_CONFIG or plugin.toml)"
    )]
    pub config: Option<PathBuf>,

    /// Version override, filled from `PLUGIN_VERSION` by the entry point
    #[arg(skip)]
    pub version_override: Option<String>,
}

impl GlobalOpts {
    /// Get the effective verbosity level
    /// - 0: quiet/warn only
    /// - 1: debug (-v)
    /// - 2: trace (-vv)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Path of the plugin configuration file for this invocation
    pub fn config_path(&self) -> PathBuf {
        PluginConfig::path(self.config.as_deref())
    }
}
