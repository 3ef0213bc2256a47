//! Bundle state errors

use super::VendrError;

/// Creates a repository absent error
pub fn repository_absent(path: impl Into<String>) -> VendrError {
    VendrError::RepositoryAbsent { path: path.into() }
}

/// Creates a bundle mismatch error
pub fn mismatch(name: impl Into<String>, version: impl Into<String>) -> VendrError {
    VendrError::BundleMismatch {
        name: name.into(),
        version: version.into(),
    }
}
