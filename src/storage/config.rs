//! JSON settings file.
//!
//! Stored in `<config dir>/TwitterUrlFixer/settings.json`. Only timing,
//! start-up and logging knobs live here; the mirror set, the selected mirror
//! and the update URL never do.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::constants::*;

/// User-tunable settings. Missing fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Clipboard poll interval in milliseconds.
    pub poll_interval_ms: u64,
    /// Back-off after a failed clipboard read, in milliseconds.
    pub read_retry_ms: u64,
    /// Timeout for the update download, in seconds.
    pub download_timeout_secs: u64,
    /// Run an update check right after start-up.
    pub check_updates_on_startup: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            read_retry_ms: DEFAULT_READ_RETRY_MS,
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            check_updates_on_startup: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text.
    pub fn from_json(path: &Path, contents: &str) -> Result<Self> {
        let mut settings: Settings =
            serde_json::from_str(contents).map_err(|source| Error::Settings {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate();
        Ok(settings)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_json(path, &contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write the defaults to `path` unless a file already exists there.
    pub fn write_default_if_missing(path: &Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Self::default()).map_err(io::Error::other)?;
        fs::write(path, json)?;
        Ok(true)
    }

    /// Clamp timings into range. Zero intervals would turn the watcher into
    /// a busy loop, and huge ones overflow `Instant` arithmetic.
    pub fn validate(&mut self) {
        self.poll_interval_ms = self.poll_interval_ms.clamp(1, MAX_POLL_INTERVAL_MS);
        self.read_retry_ms = self
            .read_retry_ms
            .clamp(self.poll_interval_ms, MAX_READ_RETRY_MS);
        self.download_timeout_secs = self
            .download_timeout_secs
            .clamp(1, MAX_DOWNLOAD_TIMEOUT_SECS);
        if self.log_filter.trim().is_empty() {
            self.log_filter = DEFAULT_LOG_FILTER.to_string();
        }
    }
}

/// Application directory: `<config dir>/TwitterUrlFixer`.
///
/// Falls back to the working directory when the platform has no config dir.
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Full path of `settings.json`.
pub fn settings_path() -> PathBuf {
    app_dir().join(SETTINGS_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings =
            Settings::from_json(Path::new("settings.json"), r#"{ "poll_interval_ms": 250 }"#)
                .unwrap();
        assert_eq!(settings.poll_interval_ms, 250);
        assert_eq!(settings.read_retry_ms, DEFAULT_READ_RETRY_MS);
        assert!(settings.check_updates_on_startup);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut settings = Settings {
            poll_interval_ms: 0,
            read_retry_ms: 0,
            ..Settings::default()
        };
        settings.validate();
        assert_eq!(settings.poll_interval_ms, 1);
        assert_eq!(settings.read_retry_ms, 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = Settings::from_json(Path::new("settings.json"), "{ nope").unwrap_err();
        assert!(matches!(err, Error::Settings { .. }));
    }
}
