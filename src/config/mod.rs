//! Configuration handling for Vendr
//!
//! This module contains:
//! - `vendr.yaml` - the project manifest declaring bundles
//! - vendor directory resolution against the project root

pub mod manifest;
mod serialization;

use std::path::{Path, PathBuf};

pub use manifest::Manifest;

/// Manifest file name, looked up in the project root
pub const MANIFEST_FILE: &str = "vendr.yaml";

/// Vendor directory used when neither the flag nor the manifest names one
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

/// Path of the manifest for a project
pub fn manifest_path(project_root: &Path) -> PathBuf {
    project_root.join(MANIFEST_FILE)
}

/// Resolve the vendor directory: flag, then manifest, then the default
///
/// Relative paths are taken from the project root.
pub fn resolve_vendor_dir(
    project_root: &Path,
    flag: Option<&Path>,
    manifest: &Manifest,
) -> PathBuf {
    let chosen = flag
        .map(Path::to_path_buf)
        .or_else(|| manifest.vendor.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VENDOR_DIR));

    if chosen.is_absolute() {
        chosen
    } else {
        project_root.join(chosen)
    }
}
