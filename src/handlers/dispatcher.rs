//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and applies them on
//! the host thread. Hosts call it from their loop (tray timer or console
//! `recv`) and stop when it returns anything other than [`Flow::Continue`].
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → Dispatcher::dispatch_all() → menu / update worker
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::events::{AppEvent, EventPublisher};
use crate::menu::MenuController;
use crate::update::{UpdateManager, UpdateOutcome, UpdatePrompt};

/// What the host loop should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the loop and exit.
    Exit,
    /// Leave the loop, start the executable at this path, then exit.
    Restart(PathBuf),
}

/// Applies events to the menu and starts update workers.
pub struct Dispatcher {
    menu: MenuController,
    updates: Option<Arc<UpdateManager>>,
    prompt: Arc<dyn UpdatePrompt>,
    publisher: EventPublisher,
}

impl Dispatcher {
    pub fn new(
        menu: MenuController,
        updates: Option<Arc<UpdateManager>>,
        prompt: Arc<dyn UpdatePrompt>,
        publisher: EventPublisher,
    ) -> Self {
        Self {
            menu,
            updates,
            prompt,
            publisher,
        }
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    /// Handle a batch in order, stopping at the first terminal event.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = AppEvent>) -> Flow {
        for event in events {
            let flow = self.dispatch(event);
            if flow != Flow::Continue {
                return flow;
            }
        }
        Flow::Continue
    }

    /// Handle a single event.
    pub fn dispatch(&mut self, event: AppEvent) -> Flow {
        debug!("Dispatching: {}", event.description());
        match event {
            AppEvent::ToggleMonitoring => {
                if self.menu.toggle_monitoring() {
                    info!("Monitoring resumed");
                } else {
                    info!("Monitoring paused");
                }
                Flow::Continue
            }

            AppEvent::SelectMirror(mirror) => {
                self.menu.select_mirror(mirror);
                info!("Twitter mirror set to {}", mirror);
                Flow::Continue
            }

            AppEvent::CheckForUpdates => {
                let _ = self.spawn_update();
                Flow::Continue
            }

            AppEvent::Quit => {
                info!("Quit requested");
                Flow::Exit
            }

            AppEvent::UpdateInstalled(path) => Flow::Restart(path),
        }
    }

    /// Start an update check on a worker thread.
    ///
    /// Returns `None` when updates are unavailable, a check is already
    /// running, or the thread could not be started.
    pub fn spawn_update(&self) -> Option<JoinHandle<()>> {
        let Some(manager) = &self.updates else {
            warn!("{}", Error::UpdatesUnsupported);
            return None;
        };
        if manager.is_busy() {
            info!("Update check already in progress");
            return None;
        }

        let manager = Arc::clone(manager);
        let prompt = Arc::clone(&self.prompt);
        let publisher = self.publisher.clone();
        let spawned = thread::Builder::new()
            .name("update".into())
            .spawn(move || match manager.check_and_apply(prompt.as_ref()) {
                Ok(UpdateOutcome::Installed(path)) => {
                    publisher.publish(AppEvent::UpdateInstalled(path));
                }
                Ok(outcome) => debug!("Update check finished: {:?}", outcome),
                Err(e) => error!("Update failed: {}", e),
            });

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!("Failed to start update thread: {}", e);
                None
            }
        }
    }
}
