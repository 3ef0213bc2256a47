//! Native gzip-tar and zip extraction
//!
//! Extraction writes into the destination and overwrites files that already
//! exist there. Entry paths that would escape the destination are skipped.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, warn};

use super::ContentKind;
use crate::error::{
    Result,
    fetch::extraction_failed,
    fs::{read_failed, write_failed},
};

/// Name the wrapper directory is moved to while its children are promoted
const FLATTEN_TMP: &str = ".vendr-flatten";

/// Extract `archive` into `dest`, creating `dest` if needed
pub fn extract_archive(kind: ContentKind, archive: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| write_failed(dest, &e))?;

    debug!(archive = %archive.display(), dest = %dest.display(), ?kind, "extracting");
    match kind {
        ContentKind::GzipArchive => extract_tar_gz(archive, dest),
        ContentKind::ZipArchive => extract_zip(archive, dest),
        ContentKind::Plain => Err(extraction_failed(archive, "not a recognized archive")),
    }
}

fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| read_failed(archive, &e))?;
    let mut tarball = tar::Archive::new(GzDecoder::new(file));
    tarball.set_overwrite(true);
    tarball
        .unpack(dest)
        .map_err(|e| extraction_failed(archive, e))
}

fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| read_failed(archive, &e))?;
    let mut zipped = zip::ZipArchive::new(file).map_err(|e| extraction_failed(archive, e))?;

    for i in 0..zipped.len() {
        let mut entry = zipped
            .by_index(i)
            .map_err(|e| extraction_failed(archive, e))?;
        let Some(relative) = entry.enclosed_name() else {
            warn!(name = entry.name(), "skipping zip entry outside destination");
            continue;
        };
        let entry_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&entry_path).map_err(|e| write_failed(&entry_path, &e))?;
            continue;
        }

        if let Some(parent) = entry_path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;
        }
        let mut out = File::create(&entry_path).map_err(|e| write_failed(&entry_path, &e))?;
        io::copy(&mut entry, &mut out).map_err(|e| extraction_failed(archive, e))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&entry_path, fs::Permissions::from_mode(mode & 0o7777))
                .map_err(|e| write_failed(&entry_path, &e))?;
        }
    }

    Ok(())
}

/// Promote the children of a lone top-level directory into `root`
///
/// Returns `true` when `root` held exactly one entry and it was a directory.
/// Any other shape (several entries, a single file, nothing) is left as-is.
pub fn flatten_single_root(root: &Path) -> Result<bool> {
    let entries = fs::read_dir(root)
        .map_err(|e| read_failed(root, &e))?
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| read_failed(root, &e))?;

    let [wrapper] = entries.as_slice() else {
        return Ok(false);
    };
    let is_dir = wrapper
        .file_type()
        .map_err(|e| read_failed(&wrapper.path(), &e))?
        .is_dir();
    if !is_dir {
        return Ok(false);
    }

    // The wrapper may contain a child with its own name (foo/foo), so it is
    // moved aside before its children come up.
    let mut parked_name = FLATTEN_TMP.to_string();
    let mut suffix = 0;
    while wrapper.path().join(&parked_name).exists() {
        suffix += 1;
        parked_name = format!("{FLATTEN_TMP}-{suffix}");
    }
    let parked = root.join(parked_name);
    fs::rename(wrapper.path(), &parked).map_err(|e| write_failed(&parked, &e))?;

    for child in fs::read_dir(&parked).map_err(|e| read_failed(&parked, &e))? {
        let child = child.map_err(|e| read_failed(&parked, &e))?;
        let target = root.join(child.file_name());
        fs::rename(child.path(), &target).map_err(|e| write_failed(&target, &e))?;
    }
    fs::remove_dir(&parked).map_err(|e| write_failed(&parked, &e))?;

    debug!(root = %root.display(), wrapper = ?wrapper.file_name(), "flattened single-root archive");
    Ok(true)
}
