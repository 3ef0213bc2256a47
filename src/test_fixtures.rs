//! Test fixtures for building archives and bundle layouts at test time.
//!
//! Archives are generated with the same crates the installer reads them
//! with, so no binary fixtures live in the repository.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{write_zip, write_tar_gz};
//!
//! write_zip(&path, &[("foo/", ""), ("foo/a", "a")]);
//! write_tar_gz(&path, &[("foo/a", "a"), ("foo/b", "b")]);
//! ```
//!
//! Entry names ending in `/` are directories.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::{Compression, write::GzEncoder};
use zip::write::SimpleFileOptions;

/// Write a zip archive with the given entries
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).expect("Failed to create zip fixture");
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, content) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(*name, options)
                .expect("Failed to add zip directory");
        } else {
            writer
                .start_file(*name, options)
                .expect("Failed to start zip entry");
            writer.write_all(content.as_bytes()).expect("Failed to write zip entry");
        }
    }

    writer.finish().expect("Failed to finish zip fixture");
}

/// Write a gzip-compressed tarball with the given entries
pub fn write_tar_gz(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).expect("Failed to create tarball fixture");
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

    for (name, content) in entries {
        let mut header = tar::Header::new_gnu();
        if name.ends_with('/') {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_mode(0o755);
            header.set_size(0);
            header.set_cksum();
            builder
                .append_data(&mut header, name, std::io::empty())
                .expect("Failed to add tar directory");
        } else {
            header.set_mode(0o644);
            header.set_size(content.len() as u64);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_bytes())
                .expect("Failed to add tar entry");
        }
    }

    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream");
}
