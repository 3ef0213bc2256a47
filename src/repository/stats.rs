//! Repository statistics and listing
//!
//! Read-only: nothing here creates or removes repository content.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, fs::read_failed};

/// A bundle name in the repository, aggregated across versions
#[derive(Debug, Clone)]
pub struct CachedBundle {
    pub name: String,
    /// Version directory names, sorted
    pub versions: Vec<String>,
    /// Total size in bytes
    pub size: u64,
}

impl CachedBundle {
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Repository statistics
#[derive(Debug, Default)]
pub struct RepositoryStats {
    /// Number of bundle names
    pub bundles: usize,
    /// Number of name/version pairs
    pub versions: usize,
    /// Total size in bytes
    pub total_size: u64,
}

impl RepositoryStats {
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{bytes} B")
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}

/// List bundles in the repository, sorted by name
///
/// A missing repository lists as empty.
pub fn list_bundles(root: &Path) -> Result<Vec<CachedBundle>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut bundles = Vec::new();
    for (name, name_dir) in subdirs(root)? {
        let mut versions = Vec::new();
        let mut size = 0;
        for (version, version_dir) in subdirs(&name_dir)? {
            size += dir_size(&version_dir);
            versions.push(version);
        }
        versions.sort();
        bundles.push(CachedBundle {
            name,
            versions,
            size,
        });
    }

    bundles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(bundles)
}

/// Summarize the repository
pub fn repository_stats(root: &Path) -> Result<RepositoryStats> {
    let bundles = list_bundles(root)?;
    Ok(RepositoryStats {
        bundles: bundles.len(),
        versions: bundles.iter().map(|b| b.versions.len()).sum(),
        total_size: bundles.iter().map(|b| b.size).sum(),
    })
}

/// Immediate subdirectories with their names
fn subdirs(path: &Path) -> Result<Vec<(String, std::path::PathBuf)>> {
    let entries = fs::read_dir(path).map_err(|e| read_failed(path, &e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| read_failed(path, &e))?;
        let entry_path = entry.path();
        if entry_path.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().to_string(), entry_path));
        }
    }
    Ok(dirs)
}

/// Calculate directory size recursively
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
