//! Check, install and verify a project's bundles
//!
//! [`Bundler`] ties the registry to a vendor directory and the collaborators
//! that fetch and classify artifacts. [`Bundler::perform`] is the usual entry
//! point: it returns straight away when everything is in place, otherwise it
//! installs and confirms the result.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::archive::{ContentSniffer, MagicSniffer};
use crate::domain::Registry;
use crate::error::Result;
use crate::fetcher::{Fetch, SourceFetcher};
use crate::installer::{InstallReport, Installer};
use crate::progress::ProgressDisplay;
use crate::verifier::{CheckOutcome, READY_MESSAGE, Verifier};

/// How a successful `perform` got there
#[derive(Debug)]
pub enum PerformOutcome {
    /// Nothing needed doing
    AlreadySatisfied,
    /// Bundles were installed and the result verified
    Installed(InstallReport),
}

impl PerformOutcome {
    pub fn message(&self) -> String {
        match self {
            PerformOutcome::AlreadySatisfied => READY_MESSAGE.to_string(),
            PerformOutcome::Installed(report) => format!(
                "installed {} bundle(s), {} already up to date",
                report.installed(),
                report.skipped()
            ),
        }
    }
}

/// A registry bound to a vendor directory
pub struct Bundler {
    registry: Registry,
    vendor_dir: PathBuf,
    fetcher: Box<dyn Fetch>,
    sniffer: Box<dyn ContentSniffer>,
}

impl Bundler {
    /// Bundler with the HTTP/file fetcher and magic-byte classification
    ///
    /// Relative local sources are read from `project_root`.
    pub fn new(
        registry: Registry,
        vendor_dir: impl Into<PathBuf>,
        project_root: &Path,
    ) -> Result<Self> {
        let fetcher = SourceFetcher::new(project_root)?;
        Ok(Self::with_parts(
            registry,
            vendor_dir,
            Box::new(fetcher),
            Box::new(MagicSniffer),
        ))
    }

    pub fn with_parts(
        registry: Registry,
        vendor_dir: impl Into<PathBuf>,
        fetcher: Box<dyn Fetch>,
        sniffer: Box<dyn ContentSniffer>,
    ) -> Self {
        Self {
            registry,
            vendor_dir: vendor_dir.into(),
            fetcher,
            sniffer,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn vendor_dir(&self) -> &Path {
        &self.vendor_dir
    }

    /// Read-only verification
    pub fn check(&self) -> CheckOutcome {
        Verifier::new(&self.registry, &self.vendor_dir).check()
    }

    /// Install every bundle that is not already in place
    pub fn install(&self, progress: Option<&ProgressDisplay>) -> Result<InstallReport> {
        let installer = Installer::new(
            &self.registry,
            &self.vendor_dir,
            self.fetcher.as_ref(),
            self.sniffer.as_ref(),
        );
        let installer = match progress {
            Some(progress) => installer.with_progress(progress),
            None => installer,
        };

        let report = installer.install()?;
        if let Some(progress) = progress {
            progress.finish();
        }
        Ok(report)
    }

    /// Check; if unmet, install and check again
    ///
    /// A failing check after a completed install is reported as an error.
    pub fn perform(&self, progress: Option<&ProgressDisplay>) -> Result<PerformOutcome> {
        let before = self.check();
        if before.is_ok() {
            debug!("all bundles in place");
            return Ok(PerformOutcome::AlreadySatisfied);
        }
        info!(reason = %before.message(), "installing bundles");

        let report = self.install(progress)?;

        match self.check().into_error(self.registry.repository_root()) {
            Some(err) => Err(err),
            None => Ok(PerformOutcome::Installed(report)),
        }
    }
}
