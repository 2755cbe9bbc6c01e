//! Rename-based replacement of the running executable.
//!
//! `exe` → `exe.bak`, then `replacement` → `exe`. If the second rename
//! fails, one attempt is made to move the backup back. That restore is
//! logged but not verified.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::model::constants::{BACKUP_CLEANUP_ATTEMPTS, BACKUP_CLEANUP_DELAY, BACKUP_SUFFIX};

/// `<exe>.bak`, next to the executable.
pub fn backup_path(exe: &Path) -> PathBuf {
    let mut name = OsString::from(exe.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Move `replacement` into `exe`'s place, keeping the old image as a backup.
pub fn replace_executable(exe: &Path, replacement: &Path) -> Result<()> {
    let backup = backup_path(exe);
    fs::rename(exe, &backup).map_err(|source| Error::Backup {
        from: exe.to_path_buf(),
        to: backup.clone(),
        source,
    })?;
    debug!("Backed up {} to {}", exe.display(), backup.display());

    if let Err(source) = fs::rename(replacement, exe) {
        match fs::rename(&backup, exe) {
            Ok(()) => info!("Restored {} from backup", exe.display()),
            Err(e) => error!(
                "Failed to restore {} from {}: {}",
                exe.display(),
                backup.display(),
                e
            ),
        }
        return Err(Error::Replace {
            from: replacement.to_path_buf(),
            to: exe.to_path_buf(),
            source,
        });
    }

    info!("Installed new executable at {}", exe.display());
    Ok(())
}

/// Downloads arrive without the execute bit on Unix.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Delete the backup left by a previous update.
///
/// On Windows the previous instance may still be exiting and holding its
/// image, so the delete is retried a few times. Returns true if a backup
/// was removed.
pub fn remove_stale_backup(exe: &Path) -> bool {
    let backup = backup_path(exe);
    for attempt in 1..=BACKUP_CLEANUP_ATTEMPTS {
        match fs::remove_file(&backup) {
            Ok(()) => {
                info!("Removed stale backup {}", backup.display());
                return true;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => return false,
            Err(e) => {
                debug!(
                    "Attempt {}/{} to remove {} failed: {}",
                    attempt,
                    BACKUP_CLEANUP_ATTEMPTS,
                    backup.display(),
                    e
                );
                if attempt < BACKUP_CLEANUP_ATTEMPTS {
                    thread::sleep(BACKUP_CLEANUP_DELAY);
                }
            }
        }
    }
    warn!("Could not remove stale backup {}", backup.display());
    false
}
