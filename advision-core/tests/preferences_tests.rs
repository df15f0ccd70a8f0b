//! Preference persistence tests against a temporary home directory.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use std::fs;

use advision_core::preferences::{self, AccentColor, Preferences, Theme};
use advision_core::PreferencesError;

#[test]
fn missing_file_yields_defaults() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let prefs = preferences::load_at(home.path()).expect("load");
    assert_eq!(prefs, Preferences::default());
    assert_eq!(prefs.theme, Theme::Light);
    assert_eq!(prefs.accent, AccentColor::Teal);
}

#[test]
fn set_theme_persists_under_fixed_key() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    preferences::set_theme_at(home.path(), Theme::Dark).expect("set theme");

    home.child(".advision/preferences.yaml")
        .assert(predicate::str::contains("advision-theme: dark"));
    let prefs = preferences::load_at(home.path()).expect("load");
    assert_eq!(prefs.theme, Theme::Dark);
}

#[test]
fn toggle_twice_returns_to_start() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    let once = preferences::toggle_theme_at(home.path()).expect("toggle");
    assert_eq!(once.theme, Theme::Dark);
    let twice = preferences::toggle_theme_at(home.path()).expect("toggle");
    assert_eq!(twice.theme, Theme::Light);
}

#[test]
fn accent_and_theme_are_independent() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    preferences::set_theme_at(home.path(), Theme::Dark).expect("theme");
    preferences::set_accent_at(home.path(), AccentColor::Orange).expect("accent");

    let prefs = preferences::load_at(home.path()).expect("load");
    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.accent, AccentColor::Orange);
    assert_eq!(prefs.accent.hex(), "#f59e0b");
}

#[test]
fn unrelated_keys_survive_save() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".advision/preferences.yaml")
        .write_str("sidebar: collapsed\nadvision-theme: dark\n")
        .expect("seed file");

    preferences::set_accent_at(home.path(), AccentColor::Green).expect("accent");

    let contents =
        fs::read_to_string(preferences::preferences_path_at(home.path())).expect("read");
    assert!(contents.contains("sidebar: collapsed"), "got: {contents}");
    assert!(contents.contains("advision-accent: green"), "got: {contents}");
    assert!(contents.contains("advision-theme: dark"), "got: {contents}");
}

#[test]
fn corrupt_file_returns_parse_error_with_path() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".advision/preferences.yaml")
        .write_str("- not\n- a\n- map\n")
        .expect("seed file");

    let err = preferences::load_at(home.path()).unwrap_err();
    assert!(matches!(err, PreferencesError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("preferences.yaml"));
}

#[cfg(unix)]
#[test]
fn saved_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let home = assert_fs::TempDir::new().expect("tempdir");
    preferences::save_at(home.path(), &Preferences::default()).expect("save");
    let path = preferences::preferences_path_at(home.path());
    let mode = fs::metadata(&path).expect("meta").permissions().mode() & 0o777;
    assert_eq!(mode, 0o600, "expected 0600, got {mode:o}");
}
