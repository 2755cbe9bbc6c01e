//! Release artifact download.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

/// Fetches a URL into a file.
pub trait Downloader: Send + Sync {
    /// Download `url` to `dest`. Any non-2xx status is an error.
    fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Blocking `reqwest` downloader with an overall timeout.
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("twitter-url-fixer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        debug!("GET {}", url);
        let mut response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let io_err = |source| Error::Io {
            path: dest.to_path_buf(),
            source,
        };
        let mut file = File::create(dest).map_err(io_err)?;
        let written = response.copy_to(&mut file)?;
        file.flush().map_err(io_err)?;
        debug!("Downloaded {} bytes to {}", written, dest.display());
        Ok(())
    }
}
