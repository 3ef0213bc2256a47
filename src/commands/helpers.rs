//! Command helper utilities

use std::path::PathBuf;

use tracing::debug;

use crate::bundler::Bundler;
use crate::cli::GlobalArgs;
use crate::config::{self, Manifest};
use crate::domain::Registry;
use crate::error::{Result, VendrError};
use crate::repository;

/// Resolve the project root from the optional argument
///
/// Falls back to the current directory. Existing paths are canonicalized.
pub fn resolve_project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    let path = match project {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| VendrError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };

    Ok(dunce::canonicalize(&path).unwrap_or(path))
}

/// Load the manifest and build a bundler for it
pub fn load_bundler(global: &GlobalArgs) -> Result<Bundler> {
    let project_root = resolve_project_root(global.project.clone())?;
    let manifest = Manifest::load(&config::manifest_path(&project_root))?;

    let repository_root = repository::repository_dir(global.repository.as_deref())?;
    let vendor_dir = config::resolve_vendor_dir(&project_root, global.vendor.as_deref(), &manifest);
    debug!(
        project = %project_root.display(),
        repository = %repository_root.display(),
        vendor = %vendor_dir.display(),
        bundles = manifest.bundles.len(),
        "loaded manifest"
    );

    let registry = Registry::new(repository_root, manifest.bundles);
    Bundler::new(registry, vendor_dir, &project_root)
}
