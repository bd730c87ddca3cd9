// Settings Tests - Testing Settings defaults, validation and persistence

use crate::chat::{Settings, MAX_OPEN_WINDOWS};
use crate::Error;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.max_open_windows, 3);
    assert_eq!(settings.time_format, "%H:%M");
    assert_eq!(settings.chat_started_template, "Started chat with {name}");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_chat_started_text() {
    let settings = Settings::default();
    assert_eq!(settings.chat_started_text("Alice Wonderland"), "Started chat with Alice Wonderland");
}

#[test]
fn test_settings_validation() {
    let mut settings = Settings::default();
    settings.max_open_windows = 0;
    assert!(matches!(settings.validate(), Err(Error::Config(_))));

    let mut settings = Settings::default();
    settings.max_open_windows = MAX_OPEN_WINDOWS + 1;
    assert!(matches!(settings.validate(), Err(Error::Config(_))));

    let mut settings = Settings::default();
    settings.max_open_windows = usize::MAX;
    assert!(matches!(settings.validate(), Err(Error::Config(_))));

    let mut settings = Settings::default();
    settings.max_open_windows = MAX_OPEN_WINDOWS;
    assert!(settings.validate().is_ok());

    let mut settings = Settings::default();
    settings.time_format = "  ".to_string();
    assert!(matches!(settings.validate(), Err(Error::Config(_))));

    let mut settings = Settings::default();
    settings.time_format = "%Q".to_string();
    assert!(matches!(settings.validate(), Err(Error::Config(_))));

    let mut settings = Settings::default();
    settings.chat_started_template = String::new();
    assert!(matches!(settings.validate(), Err(Error::Config(_))));
}

#[test]
fn test_settings_load_missing_file_returns_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings::load(temp_dir.path().join("nope.json")).expect("Failed to load");

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_load_empty_file_returns_default() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let settings = Settings::load(file.path()).expect("Failed to load");

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_partial_file_uses_defaults() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), r#"{"max_open_windows": 2}"#).expect("Failed to write");

    let settings = Settings::load(file.path()).expect("Failed to load");
    assert_eq!(settings.max_open_windows, 2);
    assert_eq!(settings.time_format, "%H:%M");
}

#[test]
fn test_settings_load_rejects_invalid() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), r#"{"max_open_windows": 0}"#).expect("Failed to write");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config(_))));

    std::fs::write(file.path(), "not json").expect("Failed to write");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config(_))));
}

#[test]
fn test_settings_save_creates_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.max_open_windows = 2;
    settings.save(&path).expect("Failed to save");

    let loaded = Settings::load(&path).expect("Failed to load");
    assert_eq!(loaded.max_open_windows, 2);
}

#[test]
fn test_settings_load_rejects_cap_above_max() {
    let file = NamedTempFile::new().expect("Failed to create temp file");

    std::fs::write(file.path(), r#"{"max_open_windows": 4}"#).expect("Failed to write");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config(_))));

    std::fs::write(file.path(), r#"{"max_open_windows": 18446744073709551615}"#).expect("Failed to write");
    assert!(matches!(Settings::load(file.path()), Err(Error::Config(_))));
}
