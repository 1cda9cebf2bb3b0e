//! Manifest output
//!
//! Writing the manifest is best-effort. The bundle is usable without it, so a
//! filesystem failure comes back as [`WriteOutcome::Failed`] instead of an
//! error and the caller decides how to report it.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::ManifestError;
use crate::types::{Manifest, OutputLocation};

/// File name of the manifest inside the plugin's output directory
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Result of a single manifest write
#[derive(Debug)]
pub enum WriteOutcome {
    Written { path: PathBuf },
    Failed { path: PathBuf, error: io::Error },
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path } | WriteOutcome::Failed { path, .. } => {
                path.as_path()
            }
        }
    }
}

/// Create the output directory if needed and write the manifest text into it,
/// replacing any manifest left by a previous build.
pub fn write_manifest(manifest_text: &str, location: &OutputLocation) -> WriteOutcome {
    let path = location.manifest_path();
    debug!("Writing manifest to: {:?}", path);

    match write_atomic(location.dir(), &path, manifest_text) {
        Ok(()) => {
            info!("Manifest written successfully to: {:?}", path);
            WriteOutcome::Written { path }
        }
        Err(error) => {
            warn!("Failed to write manifest to {:?}: {}", path, error);
            WriteOutcome::Failed { path, error }
        }
    }
}

fn write_atomic(dir: &Path, path: &Path, content: &str) -> io::Result<()> {
    write_atomic_with(dir, path, |writer| writer.write_all(content.as_bytes()))
}

/// Fill a temp file beside `path` and rename it into place.
///
/// Any failure after the temp file is created removes it again, so a failed
/// write leaves neither a partial manifest nor a stray temp file behind.
fn write_atomic_with<F>(dir: &Path, path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut io::BufWriter<fs::File>) -> io::Result<()>,
{
    fs::create_dir_all(dir)?;

    let temp_path = path.with_extension("json.tmp");
    let file = fs::File::create(&temp_path)?;

    let mut writer = io::BufWriter::new(file);
    let written = fill(&mut writer).and_then(|()| writer.flush());
    drop(writer);
    let result = written.and_then(|()| fs::rename(&temp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Read an emitted manifest back from disk
pub fn read_from_path(manifest_path: &Path) -> Result<Manifest, ManifestError> {
    debug!("Reading manifest from: {:?}", manifest_path);

    let content = fs::read_to_string(manifest_path)?;
    let manifest = Manifest::from_json(&content)?;

    info!("Manifest loaded for plugin: {}", manifest.name);
    Ok(manifest)
}
