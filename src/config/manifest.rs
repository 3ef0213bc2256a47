//! Project manifest (vendr.yaml)
//!
//! ```yaml
//! vendor: public/vendor
//! bundles:
//!   jquery:
//!     version: "3.1.0"
//!     url: https://code.jquery.com/jquery-3.1.0.min.js
//!   bootstrap:
//!     version: "3.3.7"
//!     url: ./downloads/bootstrap-3.3.7-dist.zip
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::serialization::deserialize_bundles;
use crate::domain::BundleSpec;
use crate::error::{
    Result,
    config::{invalid, not_found, parse_failed},
    fs::read_failed,
};
use crate::installer::PKG_DIR;

/// Parsed manifest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Vendor directory, relative to the project root
    #[serde(default)]
    pub vendor: Option<PathBuf>,

    /// Declared bundles, in declaration order
    #[serde(default, deserialize_with = "deserialize_bundles")]
    pub bundles: Vec<(String, BundleSpec)>,
}

impl Manifest {
    /// Parse a manifest from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let manifest: Self = serde_yaml::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(not_found(path.display().to_string()));
        }

        let yaml = std::fs::read_to_string(path).map_err(|e| read_failed(path, &e))?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::VendrError::ConfigParseFailed { reason, .. } => {
                parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Every bundle needs a usable name, version and url
    pub fn validate(&self) -> Result<()> {
        for (name, spec) in &self.bundles {
            if name.trim().is_empty() {
                return Err(invalid("bundle names must not be empty"));
            }
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(invalid(format!(
                    "bundle name '{name}' must be a single path component"
                )));
            }
            if name == PKG_DIR {
                return Err(invalid(format!(
                    "bundle name '{name}' is reserved for archive staging"
                )));
            }
            if spec.version.trim().is_empty() {
                return Err(invalid(format!("bundle '{name}' has an empty version")));
            }
            if spec.version.contains(['/', '\\']) || spec.version == "." || spec.version == ".." {
                return Err(invalid(format!(
                    "bundle '{name}' version '{}' must be a single path component",
                    spec.version
                )));
            }
            if spec.url.trim().is_empty() {
                return Err(invalid(format!("bundle '{name}' has an empty url")));
            }
        }

        Ok(())
    }
}
