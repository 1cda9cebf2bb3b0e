use crate::errors::PipelineError;
use crate::logger;
use crate::pipeline::Pipeline;
use crate::GlobalOpts;
use clap::Parser;
use fedpack_manifest::BundleConfig;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
pub struct DeclareCommand {
    /// Write the declaration to a file instead of stdout, relative to the project root
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Print or write the bundler declaration (build phase only)
pub fn handle_declare(cmd: DeclareCommand, opts: &GlobalOpts) -> Result<(), PipelineError> {
    let pipeline = Pipeline::load(opts)?;
    let bundle = pipeline.build();

    match cmd.output {
        Some(path) => {
            let path = pipeline.project_root().join(path);
            write_declaration(&bundle, &path)?;
            logger::success(&format!("Wrote bundle declaration to {}", path.display()));
        }
        None => println!("{}", bundle.to_json()?),
    }
    Ok(())
}

pub fn write_declaration(bundle: &BundleConfig, path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bundle.to_json()?)?;
    logger::debug(&format!("Bundle declaration written to {}", path.display()));
    Ok(())
}
