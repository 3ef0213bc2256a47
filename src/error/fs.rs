//! File system errors

use std::path::Path;

use super::VendrError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: &std::io::Error) -> VendrError {
    VendrError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, err: &std::io::Error) -> VendrError {
    VendrError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
