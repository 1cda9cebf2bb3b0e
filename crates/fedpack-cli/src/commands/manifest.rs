use crate::errors::PipelineError;
use crate::pipeline::Pipeline;
use crate::GlobalOpts;

/// Print the synthesized manifest without touching disk
pub fn handle_manifest(opts: &GlobalOpts) -> Result<(), PipelineError> {
    let pipeline = Pipeline::load(opts)?;
    println!("{}", pipeline.manifest().to_json()?);
    Ok(())
}
