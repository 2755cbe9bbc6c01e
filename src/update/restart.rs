//! Relaunch after an update.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Start a fresh instance of `exe` without waiting for it.
///
/// The caller is expected to exit right after this returns `Ok`.
pub fn relaunch(exe: &Path) -> Result<()> {
    let mut command = Command::new(exe);

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    let child = command.spawn().map_err(|source| Error::Relaunch {
        path: exe.to_path_buf(),
        source,
    })?;
    info!("Relaunched {} as pid {}", exe.display(), child.id());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_a_relaunch_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.exe");
        match relaunch(&missing) {
            Err(Error::Relaunch { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected relaunch error, got {:?}", other),
        }
    }
}
