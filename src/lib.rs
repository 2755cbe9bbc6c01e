//! Clipboard link rewriter.
//!
//! Watches the clipboard and rewrites x.com / twitter.com links to an
//! embed-friendly mirror and bsky.app links to fxbsky.app. Also knows how to
//! replace its own executable with the latest published build.
//!
//! Everything except `platform` is free of OS UI code so it can be tested
//! as ordinary library code.

pub mod app;
pub mod clipboard;
pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod menu;
pub mod model;
pub mod platform;
pub mod rewrite;
pub mod storage;
pub mod update;
pub mod watcher;

pub use error::{Error, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{Mirror, SharedState};
pub use rewrite::LinkRewriter;
