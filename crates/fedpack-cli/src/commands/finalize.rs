use crate::errors::PipelineError;
use crate::logger;
use crate::pipeline::Pipeline;
use crate::GlobalOpts;
use fedpack_manifest::{OutputLocation, WriteOutcome};

/// Write the manifest for an already-built bundle
pub fn handle_finalize(opts: &GlobalOpts) -> Result<(), PipelineError> {
    let pipeline = Pipeline::load(opts)?;
    finalize_and_report(&pipeline)
}

/// Run the finalize phase and report the outcome.
///
/// A failed write is logged and swallowed; the build still succeeds.
pub fn finalize_and_report(pipeline: &Pipeline) -> Result<(), PipelineError> {
    logger::step("Finalize: writing manifest.json");
    let location = pipeline.output_location();
    let outcome = pipeline.finalize()?;
    report_outcome(&outcome, pipeline.resolved().display_name(), &location);
    Ok(())
}

pub fn report_outcome(outcome: &WriteOutcome, display_name: &str, location: &OutputLocation) {
    match outcome {
        WriteOutcome::Written { .. } => {
            logger::success(&format!(
                "Generated manifest.json for \"{}\" → {}",
                display_name,
                location.display_manifest_path().display()
            ));
        }
        WriteOutcome::Failed { path, error } => {
            logger::error(&format!(
                "Failed to generate manifest.json at {}: {}",
                path.display(),
                error
            ));
        }
    }
}
