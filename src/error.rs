//! Error type shared by the library.
//!
//! Every variant names the step that failed. None of them are fatal to the
//! process: the watcher retries on its next tick and an update simply stops.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("clipboard access failed: {0}")]
    Clipboard(String),

    #[error("failed to resolve the running executable: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("failed to hash {}: {source}", path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("update server answered with status {0}")]
    HttpStatus(u16),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to back up {} to {}: {source}", from.display(), to.display())]
    Backup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move {} into {}: {source}", from.display(), to.display())]
    Replace {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to relaunch {}: {source}", path.display())]
    Relaunch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("updates are not available on this platform")]
    UpdatesUnsupported,
}

impl From<arboard::Error> for Error {
    fn from(e: arboard::Error) -> Self {
        Error::Clipboard(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
