use crate::errors::PipelineError;
use crate::pipeline::Pipeline;
use crate::GlobalOpts;
use colored::*;
use fedpack_config::VersionSource;

/// Show the configuration a build would use
pub fn handle_resolve(opts: &GlobalOpts) -> Result<(), PipelineError> {
    let pipeline = Pipeline::load(opts)?;
    let resolved = pipeline.resolved();

    let source = match resolved.version.source {
        VersionSource::Config => "plugin config",
        VersionSource::Override => "PLUGIN_VERSION",
    };

    println!("{}", "Resolved plugin:".bold().green());
    println!("  {}: {}", "name".cyan(), resolved.public_name());
    println!("  {}: {}", "display-name".cyan(), resolved.display_name());
    println!(
        "  {}: {} {}",
        "version".cyan(),
        resolved.version(),
        format!("(from {})", source).dimmed()
    );
    println!(
        "  {}: {}",
        "output".cyan(),
        pipeline.output_location().display_manifest_path().display()
    );
    println!("  {}: {}", "entry".cyan(), resolved.build.entry);
    println!("  {}: {}", "shared".cyan(), resolved.build.shared.join(", "));
    Ok(())
}
