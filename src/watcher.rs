//! Clipboard poll loop.
//!
//! Every tick reads the clipboard (when monitoring is enabled), rewrites
//! recognised links and writes the result back only if something changed.
//! The read-then-write is not transactional: another process writing the
//! clipboard between the two calls loses to this write.

use std::borrow::Cow;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::clipboard::Clipboard;
use crate::model::SharedState;
use crate::rewrite::LinkRewriter;
use crate::storage::Settings;

/// Poll timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatcherConfig {
    /// Sleep between ticks.
    pub poll_interval: Duration,
    /// Sleep after a failed clipboard read.
    pub read_retry: Duration,
}

impl From<&Settings> for WatcherConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            poll_interval: Duration::from_millis(settings.poll_interval_ms),
            read_retry: Duration::from_millis(settings.read_retry_ms),
        }
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Monitoring is disabled; the clipboard was not touched.
    Paused,
    /// The clipboard could not be read.
    ReadFailed,
    /// The clipboard holds no text.
    NoText,
    /// Text contained no recognised links.
    Unchanged,
    /// Links were rewritten and written back.
    Rewritten,
    /// Links were rewritten but the write failed.
    WriteFailed,
}

/// Watches one clipboard and rewrites links in it.
pub struct ClipboardWatcher<C> {
    clipboard: C,
    state: Arc<SharedState>,
    rewriter: LinkRewriter,
    config: WatcherConfig,
}

impl<C: Clipboard> ClipboardWatcher<C> {
    pub fn new(clipboard: C, state: Arc<SharedState>, config: WatcherConfig) -> Self {
        Self {
            clipboard,
            state,
            rewriter: LinkRewriter::new(),
            config,
        }
    }

    /// Run one poll cycle.
    pub fn tick(&mut self) -> Tick {
        if !self.state.is_monitoring() {
            return Tick::Paused;
        }

        let text = match self.clipboard.read_text() {
            Ok(Some(text)) => text,
            Ok(None) => {
                trace!("Clipboard holds no text");
                return Tick::NoText;
            }
            Err(e) => {
                warn!("Failed to read clipboard: {}", e);
                return Tick::ReadFailed;
            }
        };

        let rewritten = match self.rewriter.rewrite(&text, self.state.mirror()) {
            Cow::Borrowed(_) => return Tick::Unchanged,
            Cow::Owned(rewritten) => rewritten,
        };
        if rewritten == text {
            return Tick::Unchanged;
        }

        match self.clipboard.write_text(&rewritten) {
            Ok(()) => {
                info!("Replaced URLs in the clipboard");
                Tick::Rewritten
            }
            Err(e) => {
                warn!("Failed to write to clipboard: {}", e);
                Tick::WriteFailed
            }
        }
    }

    /// How long to sleep after `tick`.
    pub fn delay_after(&self, tick: Tick) -> Duration {
        match tick {
            Tick::ReadFailed => self.config.read_retry,
            _ => self.config.poll_interval,
        }
    }

    /// Poll forever.
    pub fn run(mut self) {
        debug!(
            "Clipboard watcher running (interval {:?}, retry {:?})",
            self.config.poll_interval, self.config.read_retry
        );
        loop {
            let tick = self.tick();
            thread::sleep(self.delay_after(tick));
        }
    }
}

/// Start a watcher on its own thread.
///
/// The clipboard is created on the watcher thread: OS clipboard handles are
/// not guaranteed to be `Send`.
pub fn spawn<C, F>(
    make_clipboard: F,
    state: Arc<SharedState>,
    config: WatcherConfig,
) -> io::Result<JoinHandle<()>>
where
    C: Clipboard + 'static,
    F: FnOnce() -> C + Send + 'static,
{
    thread::Builder::new()
        .name("clipboard-watcher".into())
        .spawn(move || ClipboardWatcher::new(make_clipboard(), state, config).run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    struct Fixed(Option<String>);

    impl Clipboard for Fixed {
        fn read_text(&mut self) -> Result<Option<String>> {
            Ok(self.0.clone())
        }

        fn write_text(&mut self, text: &str) -> Result<()> {
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl Clipboard for Broken {
        fn read_text(&mut self) -> Result<Option<String>> {
            Err(Error::Clipboard("locked by another process".into()))
        }

        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(Error::Clipboard("locked by another process".into()))
        }
    }

    #[test]
    fn test_read_failure_backs_off() {
        let config = WatcherConfig {
            poll_interval: Duration::from_millis(100),
            read_retry: Duration::from_secs(2),
        };
        let mut watcher = ClipboardWatcher::new(Broken, Arc::new(SharedState::new()), config);
        let tick = watcher.tick();
        assert_eq!(tick, Tick::ReadFailed);
        assert_eq!(watcher.delay_after(tick), Duration::from_secs(2));
    }

    #[test]
    fn test_no_text_uses_normal_interval() {
        let config = WatcherConfig::default();
        let mut watcher = ClipboardWatcher::new(Fixed(None), Arc::new(SharedState::new()), config);
        let tick = watcher.tick();
        assert_eq!(tick, Tick::NoText);
        assert_eq!(watcher.delay_after(tick), config.poll_interval);
    }

    #[test]
    fn test_rewrite_is_stable_on_next_tick() {
        let text = Some("https://twitter.com/a/status/1".to_string());
        let mut watcher = ClipboardWatcher::new(
            Fixed(text),
            Arc::new(SharedState::new()),
            WatcherConfig::default(),
        );
        assert_eq!(watcher.tick(), Tick::Rewritten);
        assert_eq!(watcher.tick(), Tick::Unchanged);
    }
}
