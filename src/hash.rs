//! BLAKE3 content digests used to decide whether a vendor copy is stale

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, fs::read_failed};

/// Hash prefix for BLAKE3 digests
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate the BLAKE3 digest of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| read_failed(path, &e))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| read_failed(path, &e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Whether `target` is a regular file whose digest equals `source`'s
pub fn same_content(source: &Path, target: &Path) -> Result<bool> {
    if !target.is_file() {
        return Ok(false);
    }

    Ok(hash_file(source)? == hash_file(target)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hash_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.txt");
        std::fs::write(&file_path, "test content").unwrap();

        let hash = hash_file(&file_path).unwrap();
        assert!(hash.starts_with(HASH_PREFIX));
        assert_eq!(hash, hash_file(&file_path).unwrap());
    }

    #[test]
    fn test_hash_file_not_found() {
        let result = hash_file(Path::new("/nonexistent/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_same_content() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.js");
        let b = temp.path().join("b.js");
        let c = temp.path().join("c.js");
        std::fs::write(&a, "var a = 1;").unwrap();
        std::fs::write(&b, "var a = 1;").unwrap();
        std::fs::write(&c, "var a = 2;").unwrap();

        assert!(same_content(&a, &b).unwrap());
        assert!(!same_content(&a, &c).unwrap());
        assert!(!same_content(&a, &temp.path().join("missing.js")).unwrap());
    }

    #[test]
    fn test_same_content_target_is_directory() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.js");
        std::fs::write(&a, "x").unwrap();
        std::fs::create_dir(temp.path().join("dir")).unwrap();

        assert!(!same_content(&a, &temp.path().join("dir")).unwrap());
    }
}
