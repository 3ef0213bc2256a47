//! Common test utilities for Vendr integration tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory and an isolated bundle repository
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project root, holds vendr.yaml
    pub path: PathBuf,
    /// Bundle repository used by every command run from this workspace
    pub repository: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let repository = temp.path().join("repository");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        Self {
            temp,
            path,
            repository,
        }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write vendr.yaml
    pub fn write_manifest(&self, yaml: &str) {
        self.write_file("vendr.yaml", yaml);
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a zip archive into the project; names ending in `/` are directories
    #[allow(dead_code)]
    pub fn write_zip(&self, path: &str, entries: &[(&str, &str)]) -> PathBuf {
        let zip_path = self.path.join(path);
        if let Some(parent) = zip_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }

        let file = File::create(&zip_path).expect("Failed to create zip");
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        for (name, content) in entries {
            if name.ends_with('/') {
                writer
                    .add_directory(*name, options)
                    .expect("Failed to add directory");
            } else {
                writer.start_file(*name, options).expect("Failed to add file");
                writer
                    .write_all(content.as_bytes())
                    .expect("Failed to write zip entry");
            }
        }
        writer.finish().expect("Failed to finish zip");
        zip_path
    }

    /// Write a gzip-compressed tar archive into the project
    #[allow(dead_code)]
    pub fn write_tar_gz(&self, path: &str, entries: &[(&str, &str)]) -> PathBuf {
        let tar_path = self.path.join(path);
        if let Some(parent) = tar_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }

        let file = File::create(&tar_path).expect("Failed to create tarball");
        let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, content) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_bytes())
                .expect("Failed to append tar entry");
        }
        builder
            .into_inner()
            .expect("Failed to finish tar")
            .finish()
            .expect("Failed to finish gzip");
        tar_path
    }

    /// The vendr binary, run from the project with the isolated repository
    pub fn vendr_cmd(&self) -> Command {
        let mut cmd = vendr_bin();
        cmd.current_dir(&self.path)
            .env("VENDR_REPOSITORY", &self.repository)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Path of an artifact in the repository
    #[allow(dead_code)]
    pub fn repository_artifact(&self, name: &str, version: &str, file: &str) -> PathBuf {
        self.repository.join(name).join(version).join(file)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn vendr_bin() -> Command {
    Command::cargo_bin("vendr").expect("vendr binary")
}

/// Modification time of a path
#[allow(dead_code)]
pub fn modified(path: &Path) -> std::time::SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .expect("Failed to read mtime")
}
