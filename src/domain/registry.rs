//! In-memory registry of declared bundles

use std::path::{Path, PathBuf};

use super::bundle::{Bundle, BundleSpec};

/// Declared bundles, in declaration order, resolved against one repository root
#[derive(Debug, Clone)]
pub struct Registry {
    repository_root: PathBuf,
    bundles: Vec<Bundle>,
}

impl Registry {
    /// Build a registry from ordered `(name, spec)` declarations
    pub fn new<I, S>(repository_root: impl Into<PathBuf>, declarations: I) -> Self
    where
        I: IntoIterator<Item = (S, BundleSpec)>,
        S: Into<String>,
    {
        let repository_root = repository_root.into();
        let bundles = declarations
            .into_iter()
            .map(|(name, spec)| Bundle::new(name, spec, &repository_root))
            .collect();

        Self {
            repository_root,
            bundles,
        }
    }

    pub fn repository_root(&self) -> &Path {
        &self.repository_root
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
