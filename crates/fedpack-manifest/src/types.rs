//! Manifest record and output location types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// =============================================================================
// MANIFEST - Emitted once per build, never mutated afterwards
// =============================================================================

/// Plugin identity as published to the host
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: Arc<str>,
    pub display_name: Arc<str>,
    #[serde(default = "empty")]
    pub description: Arc<str>,
    pub version: Arc<str>,
    #[serde(default = "empty")]
    pub icon: Arc<str>,
    #[serde(default = "empty")]
    pub author: Arc<str>,
    #[serde(default = "empty")]
    pub homepage: Arc<str>,
}

fn empty() -> Arc<str> {
    Arc::from("")
}

// =============================================================================
// OUTPUT LOCATION - `<out_root>/<name>/manifest.json`
// =============================================================================

/// Where the manifest for a build is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    /// Directory holding the bundle and the manifest
    pub dir: PathBuf,
    /// Same directory relative to the project root, used for messages
    pub display_dir: PathBuf,
}

impl OutputLocation {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        OutputLocation {
            display_dir: dir.clone(),
            dir,
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(crate::manifest_writer::MANIFEST_FILENAME)
    }

    pub fn display_manifest_path(&self) -> PathBuf {
        self.display_dir.join(crate::manifest_writer::MANIFEST_FILENAME)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
