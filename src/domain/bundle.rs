//! Bundle domain types
//!
//! A [`Bundle`] is one declared dependency resolved against a repository root.

use std::path::{Path, PathBuf};

use crate::source::Source;

/// Version that is never trusted from the repository
pub const FLOATING_VERSION: &str = "master";

/// A bundle as declared in the manifest, before it is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSpec {
    pub version: String,
    pub url: String,
}

impl BundleSpec {
    pub fn new(version: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            url: url.into(),
        }
    }
}

/// A declared bundle with its derived repository path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Unique name, also the vendor entry name
    pub name: String,
    /// Opaque version string, compared for equality only
    pub version: String,
    /// Where the artifact comes from
    pub source: Source,
    /// `<repository>/<name>/<version>/<basename(source)>`
    pub repository_path: PathBuf,
}

impl Bundle {
    pub fn new(name: impl Into<String>, spec: BundleSpec, repository_root: &Path) -> Self {
        let name = name.into();
        let source = Source::parse(&spec.url);
        let repository_path = repository_root
            .join(&name)
            .join(&spec.version)
            .join(source.file_name(&name));

        Self {
            name,
            version: spec.version,
            source,
            repository_path,
        }
    }

    /// Floating bundles are re-fetched on every install
    pub fn is_floating(&self) -> bool {
        self.version == FLOATING_VERSION
    }

    /// File name of the repository artifact
    pub fn artifact_name(&self) -> &str {
        self.repository_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.name)
    }

    /// Path of this bundle's entry inside a vendor directory
    pub fn vendor_path(&self, vendor_dir: &Path) -> PathBuf {
        vendor_dir.join(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_path_layout() {
        let bundle = Bundle::new(
            "jquery",
            BundleSpec::new("3.1.0", "https://code.jquery.com/jquery-3.1.0.min.js"),
            Path::new("/repo"),
        );
        assert_eq!(
            bundle.repository_path,
            PathBuf::from("/repo/jquery/3.1.0/jquery-3.1.0.min.js")
        );
        assert_eq!(bundle.artifact_name(), "jquery-3.1.0.min.js");
    }

    #[test]
    fn test_repository_path_is_deterministic() {
        let spec = BundleSpec::new("1.0.0", "./assets/reset.css");
        let first = Bundle::new("reset", spec.clone(), Path::new("/repo"));
        let second = Bundle::new("reset", spec, Path::new("/repo"));
        assert_eq!(first.repository_path, second.repository_path);
        assert_eq!(
            first.repository_path,
            PathBuf::from("/repo/reset/1.0.0/reset.css")
        );
    }

    #[test]
    fn test_floating_version() {
        let floating = Bundle::new(
            "lib",
            BundleSpec::new("master", "https://example.com/lib.js"),
            Path::new("/repo"),
        );
        let pinned = Bundle::new(
            "lib",
            BundleSpec::new("1.0", "https://example.com/lib.js"),
            Path::new("/repo"),
        );
        assert!(floating.is_floating());
        assert!(!pinned.is_floating());
    }

    #[test]
    fn test_vendor_path() {
        let bundle = Bundle::new(
            "bootstrap",
            BundleSpec::new("3.3.7", "/tmp/bootstrap.zip"),
            Path::new("/repo"),
        );
        assert_eq!(
            bundle.vendor_path(Path::new("/project/vendor")),
            PathBuf::from("/project/vendor/bootstrap")
        );
    }
}
