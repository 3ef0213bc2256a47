//! Artifact classification and archive extraction
//!
//! Artifacts are classified by their leading bytes, never by file name:
//! a `.js` served gzipped is still extracted, a `.zip` that is really a text
//! error page is still copied verbatim.

pub mod extract;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, fs::read_failed};

pub use extract::{extract_archive, flatten_single_root};

/// Gzip member header
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Zip local file header, empty archive and spanned archive signatures
const ZIP_MAGIC: [[u8; 4]; 3] = [
    [b'P', b'K', 0x03, 0x04],
    [b'P', b'K', 0x05, 0x06],
    [b'P', b'K', 0x07, 0x08],
];

/// What an artifact is, as far as installation is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Copied into the vendor directory as-is
    Plain,
    /// Gzip-compressed tarball
    GzipArchive,
    /// Zip archive
    ZipArchive,
}

impl ContentKind {
    /// Detect content kind from magic bytes
    pub fn from_magic_bytes(data: &[u8]) -> Self {
        if data.starts_with(&GZIP_MAGIC) {
            ContentKind::GzipArchive
        } else if ZIP_MAGIC.iter().any(|magic| data.starts_with(magic)) {
            ContentKind::ZipArchive
        } else {
            ContentKind::Plain
        }
    }

    pub fn is_archive(self) -> bool {
        !matches!(self, ContentKind::Plain)
    }
}

/// Classifies an artifact on disk
pub trait ContentSniffer {
    fn classify(&self, path: &Path) -> Result<ContentKind>;
}

/// Reads the first bytes of a file and matches known signatures
#[derive(Debug, Default, Clone, Copy)]
pub struct MagicSniffer;

impl ContentSniffer for MagicSniffer {
    fn classify(&self, path: &Path) -> Result<ContentKind> {
        let file = File::open(path).map_err(|e| read_failed(path, &e))?;

        let mut header = Vec::with_capacity(4);
        file.take(4)
            .read_to_end(&mut header)
            .map_err(|e| read_failed(path, &e))?;

        Ok(ContentKind::from_magic_bytes(&header))
    }
}
