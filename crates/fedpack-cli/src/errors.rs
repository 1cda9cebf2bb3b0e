//! Error types for the fedpack binary
//!
//! Everything here is fatal. A failed manifest write is not an error; it is
//! reported through [`fedpack_manifest::WriteOutcome`].

use fedpack_config::ConfigError;
use fedpack_manifest::ManifestError;
use std::io;
use thiserror::Error;

/// Errors that abort a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start bundler '{command}': {source}")]
    BundlerSpawn { command: String, source: io::Error },

    #[error("Bundler '{command}' failed: {status}")]
    BundlerFailed { command: String, status: String },
}
