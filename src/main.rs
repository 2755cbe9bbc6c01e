#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use tracing::{info, warn};

use twitter_url_fixer::app::App;
use twitter_url_fixer::logging;
use twitter_url_fixer::platform;
use twitter_url_fixer::storage::{self, Settings};
use twitter_url_fixer::update::UpdatePrompt;

fn main() {
    if let Err(e) = run() {
        tracing::error!("{:#}", e);
        eprintln!("twitter-url-fixer: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let settings_path = storage::settings_path();
    // Logging needs the filter from settings, so a load error is reported
    // once the subscriber is up
    let (settings, load_error) = match Settings::load(&settings_path) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    init_logging(&settings);
    info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    if let Some(e) = load_error {
        warn!("{}; using defaults", e);
    } else {
        match Settings::write_default_if_missing(&settings_path) {
            Ok(true) => info!("Wrote default settings to {}", settings_path.display()),
            Ok(false) => {}
            Err(e) => warn!(
                "Failed to write default settings to {}: {}",
                settings_path.display(),
                e
            ),
        }
    }

    let app = App::new(settings, update_prompt());
    platform::run(app)
}

#[cfg(target_os = "windows")]
fn init_logging(settings: &Settings) {
    use twitter_url_fixer::model::LOG_FILENAME;
    logging::init_file(&settings.log_filter, &storage::app_dir().join(LOG_FILENAME));
}

#[cfg(not(target_os = "windows"))]
fn init_logging(settings: &Settings) {
    logging::init_stderr(&settings.log_filter);
}

#[cfg(target_os = "windows")]
fn update_prompt() -> Arc<dyn UpdatePrompt> {
    Arc::new(platform::windows::MessageBoxPrompt)
}

#[cfg(not(target_os = "windows"))]
fn update_prompt() -> Arc<dyn UpdatePrompt> {
    Arc::new(twitter_url_fixer::update::AlwaysConfirm)
}
