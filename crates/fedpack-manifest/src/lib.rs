//! Fedpack manifest and federation output
//!
//! This crate turns a resolved plugin configuration into the two things a
//! build produces besides the bundle itself:
//! - the declaration the bundler's federation layer consumes ([`federation`])
//! - the `manifest.json` a host reads to discover the plugin ([`manifest`],
//!   written by [`manifest_writer`])
//!
//! Synthesis is pure. Only [`manifest_writer`] touches the filesystem.

pub mod errors;
pub mod federation;
pub mod manifest;
pub mod manifest_writer;
pub mod types;

pub use errors::ManifestError;
pub use federation::{declare, BuildOptions, BundleConfig, FederationConfig};
pub use manifest_writer::{read_from_path, write_manifest, WriteOutcome, MANIFEST_FILENAME};
pub use types::{Manifest, OutputLocation};
