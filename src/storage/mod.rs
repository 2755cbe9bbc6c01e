//! Settings persistence.

pub mod config;

pub use config::{app_dir, settings_path, Settings};
