//! Bundle source handling
//!
//! A bundle's `url` is either fetched over the network or copied from disk:
//! - Remote: `http://` and `https://` URLs
//! - Local: `./assets/reset.css`, `../shared/lib.js`, `/abs/path.zip`,
//!   `~/downloads/lib.tar.gz`, `file:///abs/path.zip`

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

/// Represents a parsed bundle source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched with an HTTP GET
    Remote(Url),
    /// Read from the local file system, as written in the manifest
    Local(PathBuf),
}

impl Source {
    /// Parse a source from a manifest `url` value
    ///
    /// Only `http` and `https` URLs are remote. Anything that does not parse
    /// as one of those (including Windows drive paths, which parse as URLs
    /// with a one-letter scheme) is a local path.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if let Ok(url) = Url::parse(input) {
            match url.scheme() {
                "http" | "https" => return Source::Remote(url),
                "file" => {
                    if let Ok(path) = url.to_file_path() {
                        return Source::Local(path);
                    }
                }
                _ => {}
            }
        }

        Source::Local(PathBuf::from(input))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }

    /// Last path segment of the source, used as the repository file name
    ///
    /// Falls back to `fallback` when the source has no usable file name
    /// (e.g. `https://example.com/`).
    pub fn file_name(&self, fallback: &str) -> String {
        let name = match self {
            Source::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
                .map(str::to_string),
            Source::Local(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
        };

        name.filter(|n| n != "." && n != "..")
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Resolve a local source to an absolute path
    ///
    /// `~` expands to the home directory; relative paths are resolved
    /// against `base`. Returns `None` for remote sources.
    pub fn local_path(&self, base: &Path) -> Option<PathBuf> {
        let Source::Local(path) = self else {
            return None;
        };

        let expanded = match path.strip_prefix("~") {
            Ok(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => path.clone(),
            },
            Err(_) => path.clone(),
        };

        if expanded.is_absolute() {
            Some(expanded)
        } else {
            Some(base.join(expanded))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{url}"),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
