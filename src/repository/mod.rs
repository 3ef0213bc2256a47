//! Shared bundle repository
//!
//! The repository is a per-user store of fetched artifacts, shared by every
//! project on the machine.
//!
//! ## Repository Structure
//!
//! ```text
//! ~/.vendr/bundles/
//! └── <name>/
//!     └── <version>/
//!         └── <artifact>
//! ```

pub mod stats;

use std::path::{Path, PathBuf};

use crate::error::{Result, VendrError};

pub use stats::{list_bundles, repository_stats};

/// Environment variable overriding the repository location
pub const REPOSITORY_ENV: &str = "VENDR_REPOSITORY";

/// Directory under the home directory holding vendr state
const HOME_DIR: &str = ".vendr";

/// Bundles subdirectory within that state directory
const BUNDLES_DIR: &str = "bundles";

/// Get the repository root
///
/// An explicit path wins, then `VENDR_REPOSITORY`, then `~/.vendr/bundles`.
pub fn repository_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(REPOSITORY_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir().ok_or_else(|| VendrError::RepositoryUnavailable {
        message: "Could not determine home directory".to_string(),
    })?;

    Ok(home.join(HOME_DIR).join(BUNDLES_DIR))
}
