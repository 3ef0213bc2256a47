//! Error types and handling for Vendr
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle state errors (verification)
//! - [`fetch`]: Fetch and extraction errors
//! - [`config`]: Manifest errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fetch;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Vendr operations
#[derive(Error, Diagnostic, Debug)]
pub enum VendrError {
    // Bundle state errors
    #[error("Bundle repository does not exist: {path}")]
    #[diagnostic(
        code(vendr::bundle::repository_absent),
        help("Run 'vendr install' to fetch the declared bundles")
    )]
    RepositoryAbsent { path: String },

    #[error("{name} v{version} mismatch")]
    #[diagnostic(
        code(vendr::bundle::mismatch),
        help("Run 'vendr install' to fetch and vendor this bundle")
    )]
    BundleMismatch { name: String, version: String },

    // Fetch errors
    #[error("Failed to fetch '{source_ref}': {reason}")]
    #[diagnostic(
        code(vendr::fetch::failed),
        help("Check that the URL is reachable or the local path exists")
    )]
    FetchFailed { source_ref: String, reason: String },

    #[error("Failed to extract archive '{path}': {reason}")]
    #[diagnostic(
        code(vendr::fetch::extraction_failed),
        help("The artifact may be corrupt; only gzip-tar and zip archives are supported")
    )]
    ExtractionFailed { path: String, reason: String },

    // Configuration errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(vendr::config::not_found),
        help("Create a vendr.yaml declaring your bundles")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(code(vendr::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(vendr::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Could not determine the bundle repository location: {message}")]
    #[diagnostic(
        code(vendr::config::repository_unavailable),
        help("Set VENDR_REPOSITORY or pass --repository")
    )]
    RepositoryUnavailable { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(vendr::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(vendr::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(vendr::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for VendrError {
    fn from(err: std::io::Error) -> Self {
        VendrError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for VendrError {
    fn from(err: serde_yaml::Error) -> Self {
        VendrError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, VendrError>;
