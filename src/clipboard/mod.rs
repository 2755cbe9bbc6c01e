//! Clipboard access.
//!
//! The watcher talks to the clipboard through the [`Clipboard`] trait so the
//! poll loop can be exercised without an OS clipboard. [`SystemClipboard`]
//! is the real implementation, backed by `arboard`.

use tracing::debug;

use crate::error::Result;

/// Plain-text clipboard.
pub trait Clipboard {
    /// Current clipboard text, or `None` if the clipboard holds no text.
    fn read_text(&mut self) -> Result<Option<String>>;

    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// OS clipboard via `arboard`.
///
/// The handle is opened lazily and dropped after any failure, so a clipboard
/// that is unavailable at startup (or is lost later) is reopened on the next
/// poll instead of failing forever.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                debug!("Opening system clipboard");
                arboard::Clipboard::new()?
            }
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>> {
        match self.handle()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => {
                self.inner = None;
                Err(e.into())
            }
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let result = self.handle()?.set_text(text);
        if result.is_err() {
            self.inner = None;
        }
        result.map_err(Into::into)
    }
}
