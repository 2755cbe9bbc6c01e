//! Application events for inter-module communication.
//!
//! Menu clicks, console commands and the update worker all publish these;
//! the dispatcher consumes them on the host thread.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use std::path::PathBuf;

use crate::model::Mirror;

/// Application-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Menu Events ===
    /// Flip the monitoring flag (Pause/Resume item)
    ToggleMonitoring,

    /// Choose the mirror for x.com / twitter.com links
    SelectMirror(Mirror),

    /// Run the update check (menu item or start-up)
    CheckForUpdates,

    /// Shut the application down
    Quit,

    // === Worker Events ===
    /// A new executable was swapped in at this path; relaunch and exit
    UpdateInstalled(PathBuf),
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleMonitoring => "Toggle clipboard monitoring",
            AppEvent::SelectMirror(_) => "Select Twitter mirror",
            AppEvent::CheckForUpdates => "Check for updates",
            AppEvent::Quit => "Quit",
            AppEvent::UpdateInstalled(_) => "Update installed, restart",
        }
    }
}
