//! Platform-specific hosts.
//!
//! Windows gets a notification-area icon with a popup menu. Every other
//! target gets a console host driven by typed commands. Both expose the
//! same `run(App)` entry point.

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod console;

#[cfg(target_os = "windows")]
pub use windows::run;

#[cfg(not(target_os = "windows"))]
pub use console::run;
