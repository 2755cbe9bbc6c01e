//! Application constants and default values.
//!
//! Mirror domains, URL hosts, the release artifact location, poll
//! intervals and the user-facing menu labels all live here.

use std::time::Duration;

// === Identity ===

/// Name shown as the tray title and in dialogs.
pub const APP_TITLE: &str = "URL Replacer";

/// Tray tooltip while monitoring is enabled.
pub const TOOLTIP_ACTIVE: &str = "Replaces x.com, twitter.com, and bsky.app links";

/// Tray tooltip while monitoring is paused.
pub const TOOLTIP_PAUSED: &str = "URL Replacer (paused)";

/// Directory name under the platform config dir for settings and logs.
pub const APP_DIR_NAME: &str = "TwitterUrlFixer";

/// Settings file name.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Log file name (Windows only, release builds have no console).
pub const LOG_FILENAME: &str = "twitter-url-fixer.log";

// === Hosts ===

/// Primary host rewritten to the selected mirror.
pub const X_HOST: &str = "x.com";

/// Legacy host of the same service, also rewritten to the selected mirror.
pub const TWITTER_HOST: &str = "twitter.com";

/// Bluesky host, always rewritten to [`BSKY_MIRROR_DOMAIN`].
pub const BSKY_HOST: &str = "bsky.app";

/// Fixed mirror for Bluesky links.
pub const BSKY_MIRROR_DOMAIN: &str = "fxbsky.app";

// === Updates ===

/// Published release artifact for this platform.
#[cfg(target_os = "windows")]
pub const UPDATE_ARTIFACT_URL: Option<&str> = Some(
    "https://github.com/wrigglebug/twitter-url-fixer/releases/latest/download/twitter-url-fixer.exe",
);

/// No artifact is published for this platform.
#[cfg(not(target_os = "windows"))]
pub const UPDATE_ARTIFACT_URL: Option<&str> = None;

/// Suffix appended to the executable path for the pre-swap backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Attempts made to delete a stale backup left by the previous instance.
pub const BACKUP_CLEANUP_ATTEMPTS: u32 = 5;

/// Delay between backup cleanup attempts.
pub const BACKUP_CLEANUP_DELAY: Duration = Duration::from_millis(500);

// === Timing defaults (overridable in settings.json) ===

/// Default clipboard poll interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Default back-off after a failed clipboard read, in milliseconds.
pub const DEFAULT_READ_RETRY_MS: u64 = 2_000;

/// Default timeout for the whole update download, in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 120;

/// Upper bound for the poll interval, in milliseconds.
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;

/// Upper bound for the read back-off, in milliseconds.
pub const MAX_READ_RETRY_MS: u64 = 600_000;

/// Upper bound for the update download timeout, in seconds.
pub const MAX_DOWNLOAD_TIMEOUT_SECS: u64 = 3_600;

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

// === Menu labels ===

/// Toggle label while monitoring is enabled.
pub const LABEL_PAUSE: &str = "Pause Monitoring";

/// Toggle label while monitoring is paused.
pub const LABEL_RESUME: &str = "Resume Monitoring";

/// Title of the mirror submenu.
pub const LABEL_MIRROR_MENU: &str = "Twitter Mirror";

/// Update trigger label.
pub const LABEL_CHECK_UPDATES: &str = "Check for Updates";

/// Quit trigger label.
pub const LABEL_QUIT: &str = "Quit";

// === Update prompt ===

/// Title of the update confirmation dialog.
pub const UPDATE_PROMPT_TITLE: &str = "Update Available";

/// Body of the update confirmation dialog.
pub const UPDATE_PROMPT_TEXT: &str = "A new version is available. Do you want to update?";
