use crate::commands::{declare, finalize};
use crate::errors::PipelineError;
use crate::logger;
use crate::pipeline::Pipeline;
use crate::GlobalOpts;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default declaration file, relative to the project root
pub const DEFAULT_BUNDLE_CONFIG: &str = "fedpack.bundle.json";

/// Environment variable pointing the bundler at the declaration file
pub const BUNDLE_CONFIG_ENV_VAR: &str = "FEDPACK_BUNDLE_CONFIG";

#[derive(Parser, Debug)]
pub struct BuildCommand {
    /// Where to write the bundler declaration, relative to the project root
    #[arg(long, value_name = "FILE", default_value = DEFAULT_BUNDLE_CONFIG)]
    pub bundle_config: PathBuf,

    /// Bundler command to run between the build and finalize phases
    #[arg(last = true, value_name = "BUNDLER")]
    pub bundler: Vec<String>,
}

/// Run the whole pipeline: resolve, declare, bundle, finalize
pub fn handle_build(cmd: BuildCommand, opts: &GlobalOpts) -> Result<(), PipelineError> {
    let pipeline = Pipeline::load(opts)?;
    let resolved = pipeline.resolved();
    logger::info(&format!(
        "Building {} v{} into {}",
        resolved.display_name(),
        resolved.version(),
        resolved.relative_output_dir().display()
    ));

    let bundle = pipeline.build();
    let bundle_path = pipeline.project_root().join(&cmd.bundle_config);
    declare::write_declaration(&bundle, &bundle_path)?;
    let bundle_path = fs::canonicalize(&bundle_path).unwrap_or(bundle_path);

    if let Some((program, args)) = cmd.bundler.split_first() {
        run_bundler(program, args, pipeline.project_root(), &bundle_path)?;
    } else {
        logger::debug("No bundler command given; finalizing directly");
    }

    finalize::finalize_and_report(&pipeline)
}

fn run_bundler(
    program: &str,
    args: &[String],
    project_root: &Path,
    bundle_path: &Path,
) -> Result<(), PipelineError> {
    let command_line = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    logger::step(&format!("Running bundler: {}", command_line));
    logger::spinner_start(&format!("Bundling with {}...", program));

    let output = match Command::new(program)
        .args(args)
        .current_dir(project_root)
        .env(BUNDLE_CONFIG_ENV_VAR, bundle_path)
        .output()
    {
        Ok(output) => output,
        Err(source) => {
            logger::spinner_error(&format!("Could not start {}", program));
            return Err(PipelineError::BundlerSpawn {
                command: command_line,
                source,
            });
        }
    };

    logger::capture_output(&command_line, &output);

    if !output.status.success() {
        logger::spinner_error(&format!("Bundler failed ({})", output.status));
        return Err(PipelineError::BundlerFailed {
            command: command_line,
            status: output.status.to_string(),
        });
    }

    logger::spinner_success("Bundle written");
    Ok(())
}
