//! Bundle installation into the repository and vendor directory
//!
//! This module handles:
//! - Skipping bundles that are already in the repository and vendored
//! - Fetching sources into the shared repository
//! - Copying plain artifacts into the vendor directory (digest-checked)
//! - Staging, extracting and flattening archive artifacts
//!
//! ## Vendor Layout
//!
//! ```text
//! vendor/
//! ├── .pkg/                 # Staged archive copies
//! │   └── bootstrap-3.3.7.zip
//! ├── bootstrap/            # Extracted (and flattened) archive
//! └── jquery                # Plain artifact, copied verbatim
//! ```

pub mod file_ops;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::archive::{self, ContentKind, ContentSniffer};
use crate::domain::{Bundle, Registry};
use crate::error::{Result, fs::write_failed};
use crate::fetcher::Fetch;
use crate::progress::ProgressDisplay;

/// Staging directory for archive copies, inside the vendor directory
pub const PKG_DIR: &str = ".pkg";

/// What happened to one bundle during an install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleOutcome {
    /// Repository artifact and vendor entry were already present
    Skipped,
    /// Fetched and copied verbatim
    Copied,
    /// Fetched and extracted
    Extracted,
}

/// Per-bundle outcomes of an install, in registry order
#[derive(Debug, Default)]
pub struct InstallReport {
    pub outcomes: Vec<(String, BundleOutcome)>,
}

impl InstallReport {
    pub fn installed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome != BundleOutcome::Skipped)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.installed()
    }
}

/// Installs the bundles of a registry
pub struct Installer<'a> {
    registry: &'a Registry,
    vendor_dir: &'a Path,
    fetcher: &'a dyn Fetch,
    sniffer: &'a dyn ContentSniffer,
    progress: Option<&'a ProgressDisplay>,
}

impl<'a> Installer<'a> {
    /// Create a new installer
    pub fn new(
        registry: &'a Registry,
        vendor_dir: &'a Path,
        fetcher: &'a dyn Fetch,
        sniffer: &'a dyn ContentSniffer,
    ) -> Self {
        Self {
            registry,
            vendor_dir,
            fetcher,
            sniffer,
            progress: None,
        }
    }

    /// Report progress per bundle
    pub fn with_progress(mut self, progress: &'a ProgressDisplay) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Install every declared bundle, in order
    ///
    /// Stops at the first failure; bundles installed before it stay on disk.
    pub fn install(&self) -> Result<InstallReport> {
        let root = self.registry.repository_root();
        fs::create_dir_all(root).map_err(|e| write_failed(root, &e))?;

        let mut report = InstallReport::default();
        for bundle in self.registry.bundles() {
            let outcome = self.install_bundle(bundle);
            if let Some(progress) = self.progress {
                match &outcome {
                    Ok(_) => progress.inc_bundle(),
                    Err(_) => progress.abandon(),
                }
            }
            report.outcomes.push((bundle.name.clone(), outcome?));
        }

        Ok(report)
    }

    /// Whether a bundle can be left alone
    fn is_satisfied(&self, bundle: &Bundle) -> bool {
        !bundle.is_floating()
            && bundle.repository_path.exists()
            && bundle.vendor_path(self.vendor_dir).exists()
    }

    fn install_bundle(&self, bundle: &Bundle) -> Result<BundleOutcome> {
        if self.is_satisfied(bundle) {
            debug!(name = %bundle.name, version = %bundle.version, "already installed");
            return Ok(BundleOutcome::Skipped);
        }

        info!(
            name = %bundle.name,
            version = %bundle.version,
            source = %bundle.source,
            remote = bundle.source.is_remote(),
            "installing"
        );
        if let Some(progress) = self.progress {
            progress.start_bundle(&bundle.name, &bundle.version);
        }

        self.fetcher
            .fetch_to_repository(&bundle.source, &bundle.repository_path)?;

        let kind = self.sniffer.classify(&bundle.repository_path)?;
        debug!(name = %bundle.name, ?kind, "classified artifact");

        let vendor_entry = bundle.vendor_path(self.vendor_dir);
        if kind.is_archive() {
            let staged = self.staging_path(bundle);
            file_ops::copy_if_changed(&bundle.repository_path, &staged)?;
            self.extract_to_vendor(kind, &staged, &vendor_entry)?;
            Ok(BundleOutcome::Extracted)
        } else {
            file_ops::copy_if_changed(&bundle.repository_path, &vendor_entry)?;
            Ok(BundleOutcome::Copied)
        }
    }

    fn staging_path(&self, bundle: &Bundle) -> PathBuf {
        self.vendor_dir.join(PKG_DIR).join(bundle.artifact_name())
    }

    /// Extract into a scratch directory, flatten there, then move into place
    fn extract_to_vendor(
        &self,
        kind: ContentKind,
        archive: &Path,
        vendor_entry: &Path,
    ) -> Result<()> {
        let pkg_dir = self.vendor_dir.join(PKG_DIR);
        let scratch = tempfile::Builder::new()
            .prefix(".extract-")
            .tempdir_in(&pkg_dir)
            .map_err(|e| write_failed(&pkg_dir, &e))?;

        archive::extract_archive(kind, archive, scratch.path())?;
        archive::flatten_single_root(scratch.path())?;
        file_ops::merge_into(scratch.path(), vendor_entry)
    }
}
