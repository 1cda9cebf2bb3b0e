use std::io;
use thiserror::Error;

/// Errors that can occur while producing manifest or declaration text
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
