//! Windows host built on the Win32 API.
//!
//! - `host`: hidden window, message loop and event pump
//! - `tray`: notification-area icon and popup menu
//! - `dialogs`: update confirmation message box

pub mod dialogs;
pub mod host;
pub mod tray;

pub use dialogs::MessageBoxPrompt;
pub use host::run;
