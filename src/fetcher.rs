//! Fetching bundle sources into the repository
//!
//! Remote sources are downloaded with a blocking HTTP GET, local sources are
//! read from disk. Either way the bytes are written untouched: artifacts may
//! be archives, so nothing is decoded as text.
//!
//! Content lands in a temporary file next to the destination and is renamed
//! into place, so an interrupted fetch never leaves a truncated artifact at a
//! path the repository would later trust.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, fetch, fs::write_failed};
use crate::source::Source;

/// Request timeout for remote sources
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Materializes a bundle source at a repository path
pub trait Fetch {
    fn fetch_to_repository(&self, source: &Source, dest: &Path) -> Result<()>;
}

/// Fetches over HTTP(S) or from the local file system
pub struct SourceFetcher {
    client: Client,
    /// Base for relative local sources (the project root)
    base_dir: PathBuf,
}

impl SourceFetcher {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("vendr/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| fetch::failed("http client", e))?;

        Ok(Self {
            client,
            base_dir: base_dir.into(),
        })
    }

    #[cfg(test)]
    fn with_client(client: Client, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            base_dir: base_dir.into(),
        }
    }

    fn download(&self, url: &url::Url, out: &mut File) -> Result<()> {
        debug!(%url, "downloading");
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| fetch::failed(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch::failed(url.as_str(), format!("HTTP {status}")));
        }

        let bytes = response
            .copy_to(out)
            .map_err(|e| fetch::failed(url.as_str(), e))?;
        debug!(%url, bytes, "downloaded");
        Ok(())
    }

    fn copy_local(&self, path: &Path, out: &mut File) -> Result<()> {
        debug!(path = %path.display(), "copying local source");
        let content =
            std::fs::read(path).map_err(|e| fetch::failed(path.display().to_string(), e))?;
        out.write_all(&content)
            .map_err(|e| fetch::failed(path.display().to_string(), e))
    }
}

impl Fetch for SourceFetcher {
    fn fetch_to_repository(&self, source: &Source, dest: &Path) -> Result<()> {
        let parent = dest.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| write_failed(parent, &e))?;

        let mut staged = NamedTempFile::new_in(parent).map_err(|e| write_failed(parent, &e))?;

        match source {
            Source::Remote(url) => self.download(url, staged.as_file_mut())?,
            Source::Local(_) => {
                let path = source
                    .local_path(&self.base_dir)
                    .unwrap_or_else(|| self.base_dir.clone());
                self.copy_local(&path, staged.as_file_mut())?;
            }
        }

        staged
            .as_file()
            .sync_all()
            .map_err(|e| write_failed(dest, &e))?;
        staged
            .persist(dest)
            .map_err(|e| write_failed(dest, &e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    use crate::error::VendrError;

    /// Serve a single HTTP response on a random local port
    fn serve_once(status: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let header = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(header.as_bytes()).unwrap();
            stream.write_all(&body).unwrap();
        });

        format!("http://{addr}/dist/lib.bin")
    }

    fn direct_fetcher(base_dir: &Path) -> SourceFetcher {
        let client = Client::builder().no_proxy().build().unwrap();
        SourceFetcher::with_client(client, base_dir)
    }

    #[test]
    fn test_fetch_local_source_is_byte_exact() {
        let temp = TempDir::new().unwrap();
        let payload: Vec<u8> = vec![0x1f, 0x8b, 0x00, 0xff, 0xfe, b'\n', 0x80];
        std::fs::write(temp.path().join("lib.bin"), &payload).unwrap();

        let fetcher = SourceFetcher::new(temp.path()).unwrap();
        let dest = temp.path().join("repo/lib/1.0/lib.bin");
        fetcher
            .fetch_to_repository(&Source::parse("./lib.bin"), &dest)
            .unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), payload);
    }

    #[test]
    fn test_fetch_local_source_overwrites() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.css"), "body {}").unwrap();
        let dest = temp.path().join("repo/a/master/a.css");
        std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
        std::fs::write(&dest, "stale content that is longer").unwrap();

        let fetcher = SourceFetcher::new(temp.path()).unwrap();
        fetcher
            .fetch_to_repository(&Source::parse("a.css"), &dest)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "body {}");
    }

    #[test]
    fn test_fetch_missing_local_source() {
        let temp = TempDir::new().unwrap();
        let fetcher = SourceFetcher::new(temp.path()).unwrap();
        let dest = temp.path().join("repo/x/1/x.js");

        let result = fetcher.fetch_to_repository(&Source::parse("./missing.js"), &dest);
        assert!(matches!(result, Err(VendrError::FetchFailed { .. })));
        assert!(!dest.exists());
    }

    #[test]
    fn test_fetch_remote_source() {
        let temp = TempDir::new().unwrap();
        let payload: Vec<u8> = (0u8..=255).collect();
        let url = serve_once("200 OK", payload.clone());

        let fetcher = direct_fetcher(temp.path());
        let dest = temp.path().join("repo/lib/1.0/lib.bin");
        fetcher
            .fetch_to_repository(&Source::parse(&url), &dest)
            .unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), payload);
    }

    #[test]
    fn test_fetch_remote_error_status() {
        let temp = TempDir::new().unwrap();
        let url = serve_once("404 Not Found", b"missing".to_vec());

        let fetcher = direct_fetcher(temp.path());
        let dest = temp.path().join("repo/lib/1.0/lib.bin");
        let result = fetcher.fetch_to_repository(&Source::parse(&url), &dest);

        assert!(matches!(result, Err(VendrError::FetchFailed { .. })));
        assert!(!dest.exists());
    }
}
