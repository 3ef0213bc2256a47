//! Fetch and extraction errors

use std::path::Path;

use super::VendrError;

/// Creates a fetch failed error
pub fn failed(source_ref: impl Into<String>, reason: impl ToString) -> VendrError {
    VendrError::FetchFailed {
        source_ref: source_ref.into(),
        reason: reason.to_string(),
    }
}

/// Creates an extraction failed error
pub fn extraction_failed(path: &Path, reason: impl ToString) -> VendrError {
    VendrError::ExtractionFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
