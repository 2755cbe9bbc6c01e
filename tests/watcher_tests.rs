//! Tests for the clipboard poll loop, using an in-memory clipboard.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use twitter_url_fixer::clipboard::Clipboard;
use twitter_url_fixer::watcher::{ClipboardWatcher, Tick, WatcherConfig};
use twitter_url_fixer::{Error, Mirror, Result, SharedState};

/// Clipboard contents plus a log of every write.
#[derive(Default)]
struct Board {
    text: Option<String>,
    writes: Vec<String>,
    fail_writes: bool,
}

#[derive(Clone, Default)]
struct FakeClipboard(Arc<Mutex<Board>>);

impl FakeClipboard {
    fn with_text(text: &str) -> Self {
        let fake = Self::default();
        fake.0.lock().unwrap().text = Some(text.to_string());
        fake
    }

    fn text(&self) -> Option<String> {
        self.0.lock().unwrap().text.clone()
    }

    fn writes(&self) -> Vec<String> {
        self.0.lock().unwrap().writes.clone()
    }
}

impl Clipboard for FakeClipboard {
    fn read_text(&mut self) -> Result<Option<String>> {
        Ok(self.0.lock().unwrap().text.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut board = self.0.lock().unwrap();
        if board.fail_writes {
            return Err(Error::Clipboard("busy".into()));
        }
        board.text = Some(text.to_string());
        board.writes.push(text.to_string());
        Ok(())
    }
}

fn watcher(clipboard: &FakeClipboard) -> (ClipboardWatcher<FakeClipboard>, Arc<SharedState>) {
    let state = Arc::new(SharedState::new());
    let config = WatcherConfig {
        poll_interval: Duration::from_millis(100),
        read_retry: Duration::from_secs(2),
    };
    (
        ClipboardWatcher::new(clipboard.clone(), Arc::clone(&state), config),
        state,
    )
}

// === Write Tests ===

#[test]
fn no_match_means_no_write() {
    let clipboard = FakeClipboard::with_text("just some notes");
    let (mut watcher, _) = watcher(&clipboard);
    assert_eq!(watcher.tick(), Tick::Unchanged);
    assert!(clipboard.writes().is_empty());
}

#[test]
fn match_is_written_back_once() {
    let clipboard = FakeClipboard::with_text("check this out https://x.com/user/status/123?x=1");
    let (mut watcher, _) = watcher(&clipboard);

    assert_eq!(watcher.tick(), Tick::Rewritten);
    assert_eq!(watcher.tick(), Tick::Unchanged);
    assert_eq!(
        clipboard.writes(),
        vec!["check this out https://vxtwitter.com/user/status/123?x=1".to_string()]
    );
}

#[test]
fn selected_mirror_is_read_every_tick() {
    let clipboard = FakeClipboard::with_text("https://x.com/a");
    let (mut watcher, state) = watcher(&clipboard);
    state.set_mirror(Mirror::FixupX);

    watcher.tick();
    assert_eq!(clipboard.text().as_deref(), Some("https://fixupx.com/a"));
}

#[test]
fn failed_write_is_reported_and_retried_next_tick() {
    let clipboard = FakeClipboard::with_text("https://bsky.app/profile/a");
    clipboard.0.lock().unwrap().fail_writes = true;
    let (mut watcher, _) = watcher(&clipboard);

    let tick = watcher.tick();
    assert_eq!(tick, Tick::WriteFailed);
    assert_eq!(watcher.delay_after(tick), Duration::from_millis(100));

    clipboard.0.lock().unwrap().fail_writes = false;
    assert_eq!(watcher.tick(), Tick::Rewritten);
    assert_eq!(clipboard.text().as_deref(), Some("https://fxbsky.app/profile/a"));
}

// === Pause Tests ===

#[test]
fn paused_watcher_leaves_clipboard_alone() {
    let clipboard = FakeClipboard::with_text("https://twitter.com/a");
    let (mut watcher, state) = watcher(&clipboard);
    state.set_monitoring(false);

    assert_eq!(watcher.tick(), Tick::Paused);
    assert!(clipboard.writes().is_empty());

    state.set_monitoring(true);
    assert_eq!(watcher.tick(), Tick::Rewritten);
}

#[test]
fn empty_clipboard_is_not_an_error() {
    let clipboard = FakeClipboard::default();
    let (mut watcher, _) = watcher(&clipboard);
    let tick = watcher.tick();
    assert_eq!(tick, Tick::NoText);
    assert_eq!(watcher.delay_after(tick), Duration::from_millis(100));
}
