//! Manifest and location errors

use super::VendrError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> VendrError {
    VendrError::ConfigNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> VendrError {
    VendrError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid(message: impl Into<String>) -> VendrError {
    VendrError::ConfigInvalid {
        message: message.into(),
    }
}
