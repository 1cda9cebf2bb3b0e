use crate::logger;
use crate::pipeline::Pipeline;
use crate::GlobalOpts;
use anyhow::Result;
use clap::Parser;
use colored::*;
use fedpack_manifest::read_from_path;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// Manifest to read (default: the one this project's build emits)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Print the fields of an emitted manifest
pub fn handle_inspect(cmd: InspectCommand, opts: &GlobalOpts) -> Result<()> {
    let path = match cmd.path {
        Some(path) => path,
        None => Pipeline::load(opts)?.output_location().manifest_path(),
    };
    logger::debug(&format!("Inspecting {}", path.display()));

    let manifest = read_from_path(&path)?;

    println!("{}", "Manifest:".bold().green());
    let fields = [
        ("name", &manifest.name),
        ("displayName", &manifest.display_name),
        ("description", &manifest.description),
        ("version", &manifest.version),
        ("icon", &manifest.icon),
        ("author", &manifest.author),
        ("homepage", &manifest.homepage),
    ];
    for (key, value) in fields {
        if value.is_empty() {
            println!("  {}: {}", key.cyan(), "(empty)".dimmed());
        } else {
            println!("  {}: {}", key.cyan(), value);
        }
    }
    Ok(())
}
