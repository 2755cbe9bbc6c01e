//! Tests for the model layer (SharedState, Mirror) and the settings file.

use std::fs;
use std::sync::Arc;
use std::thread;

use twitter_url_fixer::model::constants::*;
use twitter_url_fixer::storage::Settings;
use twitter_url_fixer::{Error, Mirror, SharedState};

// === Shared State Tests ===

#[test]
fn shared_state_defaults() {
    let state = SharedState::default();
    assert!(state.is_monitoring());
    assert_eq!(state.mirror(), Mirror::VxTwitter);
}

#[test]
fn shared_state_is_visible_across_threads() {
    let state = Arc::new(SharedState::new());
    let writer = Arc::clone(&state);
    thread::spawn(move || {
        writer.set_monitoring(false);
        writer.set_mirror(Mirror::FxTwitter);
    })
    .join()
    .unwrap();

    assert!(!state.is_monitoring());
    assert_eq!(state.mirror(), Mirror::FxTwitter);
}

// === Mirror Tests ===

#[test]
fn mirror_domains_are_distinct() {
    let domains: Vec<_> = Mirror::ALL.iter().map(|m| m.domain()).collect();
    assert_eq!(domains, vec!["vxtwitter.com", "fxtwitter.com", "fixupx.com"]);
}

#[test]
fn mirror_display_is_domain() {
    assert_eq!(Mirror::FixupX.to_string(), "fixupx.com");
}

#[test]
fn mirror_parses_case_insensitively() {
    assert_eq!("VXTWITTER".parse::<Mirror>(), Ok(Mirror::VxTwitter));
    assert!("x.com".parse::<Mirror>().is_err());
}

// === Settings Tests ===

#[test]
fn settings_defaults_match_constants() {
    let settings = Settings::default();
    assert_eq!(settings.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    assert_eq!(settings.read_retry_ms, DEFAULT_READ_RETRY_MS);
    assert_eq!(settings.download_timeout_secs, DEFAULT_DOWNLOAD_TIMEOUT_SECS);
    assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    assert!(settings.check_updates_on_startup);
}

#[test]
fn missing_settings_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn default_settings_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    assert!(Settings::write_default_if_missing(&path).unwrap());
    assert!(!Settings::write_default_if_missing(&path).unwrap());
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}

#[test]
fn settings_file_overrides_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{ "read_retry_ms": 5000, "check_updates_on_startup": false, "log_filter": "" }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.read_retry_ms, 5000);
    assert!(!settings.check_updates_on_startup);
    assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn oversized_timings_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let max = u64::MAX;
    fs::write(
        &path,
        format!(
            r#"{{ "poll_interval_ms": {max}, "read_retry_ms": {max}, "download_timeout_secs": {max} }}"#
        ),
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.poll_interval_ms, MAX_POLL_INTERVAL_MS);
    assert_eq!(settings.read_retry_ms, MAX_READ_RETRY_MS);
    assert_eq!(settings.download_timeout_secs, MAX_DOWNLOAD_TIMEOUT_SECS);
    assert!(settings.read_retry_ms >= settings.poll_interval_ms);
}

#[test]
fn unknown_settings_fields_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "mirror": "fixupx", "poll_interval_ms": 300 }"#).unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.poll_interval_ms, 300);
}

#[test]
fn corrupt_settings_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "not json").unwrap();

    assert!(matches!(Settings::load(&path), Err(Error::Settings { .. })));
}
