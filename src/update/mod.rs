//! Self-update.
//!
//! ```text
//! hash(exe) → download(url → staging) → hash(staging)
//!     equal      → UpToDate
//!     different  → prompt → exe → exe.bak, staging → exe → Installed
//! ```
//!
//! The relaunch itself is left to the caller so it can tear down the tray
//! icon first.

pub mod download;
pub mod hash;
pub mod restart;
pub mod swap;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::constants::UPDATE_ARTIFACT_URL;
use crate::storage::Settings;

pub use download::{Downloader, HttpDownloader};
pub use hash::{hash_file, ContentHash};
pub use restart::relaunch;
pub use swap::{backup_path, remove_stale_backup, replace_executable};

/// Asks the operator whether to install a new version.
pub trait UpdatePrompt: Send + Sync {
    /// True to go ahead with the install.
    fn confirm(&self) -> bool;
}

/// Prompt that always says yes. Used where there is nobody to ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl UpdatePrompt for AlwaysConfirm {
    fn confirm(&self) -> bool {
        true
    }
}

/// Result of one update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The published artifact is byte-identical to the running executable.
    UpToDate,
    /// A different artifact was found but the operator declined it.
    Declined,
    /// The new executable now lives at this path.
    Installed(PathBuf),
    /// Another check was already running.
    Busy,
}

/// Downloads, compares and swaps the executable.
pub struct UpdateManager {
    url: String,
    exe_path: PathBuf,
    staging_path: PathBuf,
    downloader: Box<dyn Downloader>,
    busy: AtomicBool,
}

impl UpdateManager {
    pub fn new(
        url: impl Into<String>,
        exe_path: PathBuf,
        staging_path: PathBuf,
        downloader: Box<dyn Downloader>,
    ) -> Self {
        Self {
            url: url.into(),
            exe_path,
            staging_path,
            downloader,
            busy: AtomicBool::new(false),
        }
    }

    /// Manager for the running executable and this platform's artifact.
    pub fn for_current_exe(settings: &Settings) -> Result<Self> {
        let url = UPDATE_ARTIFACT_URL.ok_or(Error::UpdatesUnsupported)?;
        let exe_path = std::env::current_exe().map_err(Error::CurrentExe)?;
        let downloader =
            HttpDownloader::new(Duration::from_secs(settings.download_timeout_secs))?;
        Ok(Self::new(
            url,
            exe_path,
            staging_path_for(url),
            Box::new(downloader),
        ))
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run one full check. Returns `Busy` without doing anything if another
    /// check holds the flag.
    pub fn check_and_apply(&self, prompt: &dyn UpdatePrompt) -> Result<UpdateOutcome> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            debug!("Update check already running");
            return Ok(UpdateOutcome::Busy);
        };

        info!("Checking for updates");
        let current = hash_file(&self.exe_path)?;
        debug!("Running executable hash {}", current);

        self.remove_staging();
        if let Err(e) = self.downloader.download(&self.url, &self.staging_path) {
            self.remove_staging();
            return Err(e);
        }

        let downloaded = match hash_file(&self.staging_path) {
            Ok(hash) => hash,
            Err(e) => {
                self.remove_staging();
                return Err(e);
            }
        };
        debug!("Downloaded artifact hash {}", downloaded);

        if downloaded == current {
            info!("Already up to date");
            self.remove_staging();
            return Ok(UpdateOutcome::UpToDate);
        }

        if let Err(e) = swap::make_executable(&self.staging_path) {
            self.remove_staging();
            return Err(e);
        }

        if !prompt.confirm() {
            info!("Update declined");
            self.remove_staging();
            return Ok(UpdateOutcome::Declined);
        }

        replace_executable(&self.exe_path, &self.staging_path)?;
        Ok(UpdateOutcome::Installed(self.exe_path.clone()))
    }

    /// Remove a backup left by the previous instance, on a background thread.
    pub fn spawn_backup_cleanup(&self) -> io::Result<JoinHandle<bool>> {
        let exe = self.exe_path.clone();
        thread::Builder::new()
            .name("backup-cleanup".into())
            .spawn(move || remove_stale_backup(&exe))
    }

    fn remove_staging(&self) {
        match fs::remove_file(&self.staging_path) {
            Ok(()) => debug!("Removed {}", self.staging_path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to remove {}: {}",
                self.staging_path.display(),
                e
            ),
        }
    }
}

/// `<temp dir>/<last path segment of url>`.
pub fn staging_path_for(url: &str) -> PathBuf {
    let name = url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("update.download");
    std::env::temp_dir().join(name)
}

/// Holds the busy flag for the lifetime of one check.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
