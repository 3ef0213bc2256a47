//! Basic file operations for vendoring
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Digest-checked copying (copy_if_changed)
//! - Moving an extracted tree over an existing entry (merge_into)

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{
    Result,
    fs::{read_failed, write_failed},
};
use crate::hash;

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;
    }
    Ok(())
}

/// Copy `source` to `target` unless `target` already has the same content
///
/// Returns `true` when a copy was made. Only `target` itself is touched, so
/// anything else living next to it is left alone. A directory sitting at
/// `target` is replaced.
pub fn copy_if_changed(source: &Path, target: &Path) -> Result<bool> {
    if hash::same_content(source, target)? {
        debug!(target = %target.display(), "content unchanged, skipping copy");
        return Ok(false);
    }

    if target.is_dir() {
        fs::remove_dir_all(target).map_err(|e| write_failed(target, &e))?;
    }

    ensure_parent_dir(target)?;
    fs::copy(source, target).map_err(|e| write_failed(target, &e))?;
    debug!(source = %source.display(), target = %target.display(), "copied");
    Ok(true)
}

/// Move every entry of `source` into `dest`, replacing what is already there
///
/// Directories present on both sides are merged recursively; any other
/// collision is resolved in favour of `source`. Entries only present in
/// `dest` survive.
pub fn merge_into(source: &Path, dest: &Path) -> Result<()> {
    if dest.exists() && !dest.is_dir() {
        fs::remove_file(dest).map_err(|e| write_failed(dest, &e))?;
    }
    fs::create_dir_all(dest).map_err(|e| write_failed(dest, &e))?;

    for entry in fs::read_dir(source).map_err(|e| read_failed(source, &e))? {
        let entry = entry.map_err(|e| read_failed(source, &e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let from_is_dir = entry
            .file_type()
            .map_err(|e| read_failed(&from, &e))?
            .is_dir();

        if from_is_dir && to.is_dir() {
            merge_into(&from, &to)?;
            continue;
        }

        if to.is_dir() {
            fs::remove_dir_all(&to).map_err(|e| write_failed(&to, &e))?;
        } else if to.symlink_metadata().is_ok() {
            fs::remove_file(&to).map_err(|e| write_failed(&to, &e))?;
        }
        fs::rename(&from, &to).map_err(|e| write_failed(&to, &e))?;
    }

    Ok(())
}
