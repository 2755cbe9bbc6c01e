//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the filter comes from settings.
//! Release builds on Windows have no console, so there the log is appended
//! to a file in the app directory. Everything else logs to stderr.

use std::path::Path;
use tracing_subscriber::EnvFilter;

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr.
pub fn init_stderr(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Append to `log_path`, falling back to stderr if it cannot be opened.
pub fn init_file(default_filter: &str, log_path: &Path) {
    let file = log_path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|_| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
        });

    match file {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_filter))
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(e) => {
            eprintln!("failed to open log file {}: {e}", log_path.display());
            init_stderr(default_filter);
        }
    }
}
