//! Process-wide state shared by the menu and the clipboard watcher.
//!
//! Each field is a single scalar read or written atomically. Writes come
//! only from the dispatcher thread, so no broader lock is needed.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use super::mirror::Mirror;

/// Monitoring flag and selected mirror.
#[derive(Debug)]
pub struct SharedState {
    monitoring: AtomicBool,
    mirror: AtomicU8,
}

impl Default for SharedState {
    fn default() -> Self {
        Self {
            monitoring: AtomicBool::new(true),
            mirror: AtomicU8::new(Mirror::default().to_u8()),
        }
    }
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the watcher allowed to touch the clipboard?
    pub fn is_monitoring(&self) -> bool {
        self.monitoring.load(Ordering::Acquire)
    }

    pub fn set_monitoring(&self, enabled: bool) {
        self.monitoring.store(enabled, Ordering::Release);
    }

    /// Mirror applied to x.com and twitter.com links.
    pub fn mirror(&self) -> Mirror {
        Mirror::from_u8(self.mirror.load(Ordering::Acquire))
    }

    pub fn set_mirror(&self, mirror: Mirror) {
        self.mirror.store(mirror.to_u8(), Ordering::Release);
    }
}
