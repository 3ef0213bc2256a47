//! Read-only check that every declared bundle is in place
//!
//! The verifier never creates, fetches or copies anything, so it is safe to
//! run as often as needed.

use std::path::Path;

use crate::domain::Registry;
use crate::error::{VendrError, bundle};

/// Message reported when everything is installed
pub const READY_MESSAGE: &str = "ready";

/// Result of a verification pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every bundle has its repository artifact and vendor entry
    Ready,
    /// The shared repository has never been created
    RepositoryAbsent,
    /// First bundle, in declaration order, missing either half
    Mismatch { name: String, version: String },
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckOutcome::Ready)
    }

    /// Human-readable status line
    pub fn message(&self) -> String {
        match self {
            CheckOutcome::Ready => READY_MESSAGE.to_string(),
            CheckOutcome::RepositoryAbsent => "bundle repository does not exist".to_string(),
            CheckOutcome::Mismatch { name, version } => format!("{name} v{version} mismatch"),
        }
    }

    /// The failure as an error, `None` when ready
    pub fn into_error(self, repository_root: &Path) -> Option<VendrError> {
        match self {
            CheckOutcome::Ready => None,
            CheckOutcome::RepositoryAbsent => Some(bundle::repository_absent(
                repository_root.display().to_string(),
            )),
            CheckOutcome::Mismatch { name, version } => Some(bundle::mismatch(name, version)),
        }
    }
}

/// Checks a registry against the repository and a vendor directory
pub struct Verifier<'a> {
    registry: &'a Registry,
    vendor_dir: &'a Path,
}

impl<'a> Verifier<'a> {
    pub fn new(registry: &'a Registry, vendor_dir: &'a Path) -> Self {
        Self {
            registry,
            vendor_dir,
        }
    }

    /// Stops at the first unmet bundle
    pub fn check(&self) -> CheckOutcome {
        if !self.registry.repository_root().exists() {
            return CheckOutcome::RepositoryAbsent;
        }

        let unmet = self.registry.bundles().iter().find(|bundle| {
            !bundle.repository_path.exists() || !bundle.vendor_path(self.vendor_dir).exists()
        });

        match unmet {
            Some(bundle) => CheckOutcome::Mismatch {
                name: bundle.name.clone(),
                version: bundle.version.clone(),
            },
            None => CheckOutcome::Ready,
        }
    }
}
