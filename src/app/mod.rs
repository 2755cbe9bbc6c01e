//! Application wiring shared by every host.
//!
//! Builds the shared state, the event bus, the dispatcher and the update
//! manager, and starts the background threads. Hosts only render the menu,
//! publish events and pump the bus.

use std::io;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::clipboard::SystemClipboard;
use crate::error::Error;
use crate::events::{AppEvent, EventBus, EventPublisher};
use crate::handlers::{Dispatcher, Flow};
use crate::menu::MenuController;
use crate::model::SharedState;
use crate::storage::Settings;
use crate::update::{UpdateManager, UpdatePrompt};
use crate::watcher::{self, WatcherConfig};

pub struct App {
    settings: Settings,
    state: Arc<SharedState>,
    bus: EventBus,
    dispatcher: Dispatcher,
    updates: Option<Arc<UpdateManager>>,
}

impl App {
    /// Wire everything up for the running executable.
    pub fn new(settings: Settings, prompt: Arc<dyn UpdatePrompt>) -> Self {
        let updates = match UpdateManager::for_current_exe(&settings) {
            Ok(manager) => Some(Arc::new(manager)),
            Err(Error::UpdatesUnsupported) => {
                debug!("{}", Error::UpdatesUnsupported);
                None
            }
            Err(e) => {
                warn!("Updates disabled: {}", e);
                None
            }
        };
        Self::with_updates(settings, prompt, updates)
    }

    /// Wire everything up with an explicit update manager (or none).
    pub fn with_updates(
        settings: Settings,
        prompt: Arc<dyn UpdatePrompt>,
        updates: Option<Arc<UpdateManager>>,
    ) -> Self {
        let state = Arc::new(SharedState::new());
        let bus = EventBus::new();
        let dispatcher = Dispatcher::new(
            MenuController::new(Arc::clone(&state)),
            updates.clone(),
            prompt,
            bus.publisher(),
        );
        Self {
            settings,
            state,
            bus,
            dispatcher,
            updates,
        }
    }

    /// Start the clipboard watcher and the backup cleanup, and queue the
    /// start-up update check if enabled.
    pub fn start_background(&self) -> io::Result<()> {
        watcher::spawn(
            SystemClipboard::new,
            Arc::clone(&self.state),
            WatcherConfig::from(&self.settings),
        )?;

        if let Some(updates) = &self.updates {
            updates.spawn_backup_cleanup()?;
            if self.settings.check_updates_on_startup {
                self.publisher().publish(AppEvent::CheckForUpdates);
            }
        }
        Ok(())
    }

    pub fn publisher(&self) -> EventPublisher {
        self.bus.publisher()
    }

    pub fn state(&self) -> &Arc<SharedState> {
        &self.state
    }

    pub fn menu(&self) -> &MenuController {
        self.dispatcher.menu()
    }

    /// Handle everything queued so far without blocking.
    pub fn pump(&mut self) -> Flow {
        let events = self.bus.drain();
        self.dispatcher.dispatch_all(events)
    }

    /// Block for the next event and handle it.
    pub fn wait(&mut self) -> Flow {
        match self.bus.recv() {
            Some(event) => self.dispatcher.dispatch(event),
            None => Flow::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mirror;
    use crate::update::AlwaysConfirm;

    #[test]
    fn test_pump_applies_queued_events() {
        let mut app = App::with_updates(Settings::default(), Arc::new(AlwaysConfirm), None);
        let publisher = app.publisher();
        publisher.publish(AppEvent::SelectMirror(Mirror::FixupX));
        publisher.publish(AppEvent::ToggleMonitoring);

        assert_eq!(app.pump(), Flow::Continue);
        assert_eq!(app.state().mirror(), Mirror::FixupX);
        assert!(!app.state().is_monitoring());
        assert_eq!(app.menu().checked_mirrors(), vec![Mirror::FixupX]);
    }

    #[test]
    fn test_wait_returns_exit_on_quit() {
        let mut app = App::with_updates(Settings::default(), Arc::new(AlwaysConfirm), None);
        app.publisher().publish(AppEvent::Quit);
        assert_eq!(app.wait(), Flow::Exit);
    }
}
