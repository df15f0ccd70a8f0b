use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use advision_core::preferences::{self, AccentColor, Theme};

fn advision_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("advision"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

#[test]
fn list_table_shows_summary_and_rows() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .args(["projects", "list"])
        .assert()
        .success()
        .stdout(contains("4 projects"))
        .stdout(contains("Summer Fashion Campaign"))
        .stdout(contains("2025-06-01 → 2025-08-31"));
}

#[test]
fn list_filters_by_status() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .args(["projects", "list", "--status", "active", "--format", "markdown"])
        .assert()
        .success()
        .stdout(contains("# Projects (2)"))
        .stdout(contains("Brand Awareness Drive"))
        .stdout(contains("Tech Product Launch").not());
}

#[test]
fn list_with_no_match_prints_empty_state() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .args(["projects", "list", "--search", "nothing-like-this"])
        .assert()
        .success()
        .stdout(contains("No projects match the current filters."));
}

#[test]
fn list_rejects_unknown_status() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .args(["projects", "list", "--status", "archived"])
        .assert()
        .failure()
        .stderr(contains("unknown status 'archived'"));
}

#[test]
fn show_json_and_missing_id() {
    let home = TempDir::new().expect("home");
    let assert = advision_cmd(home.path())
        .args(["projects", "show", "3", "--json"])
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json");
    assert_eq!(value["name"], "Holiday Sale Promotion");
    assert_eq!(value["progress"], 100);

    advision_cmd(home.path())
        .args(["projects", "show", "42"])
        .assert()
        .failure()
        .stderr(contains("project 42 not found"));
}

#[test]
fn add_derives_progress_and_notifies() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .args([
            "projects", "add", "Autumn Push", "--client", "Acme", "--budget", "$9,000",
            "--duration", "6 weeks", "--status", "completed",
        ])
        .assert()
        .success()
        .stdout(contains("Autumn Push"))
        .stdout(contains("100%"))
        .stderr(contains("Project created successfully!"));
}

#[test]
fn add_with_blank_name_fails() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .args(["projects", "add", " ", "--client", "Acme", "--budget", "$1", "--duration", "1 day"])
        .assert()
        .failure()
        .stderr(contains("Please fill in all required fields."));
}

// ---------------------------------------------------------------------------
// preferences
// ---------------------------------------------------------------------------

#[test]
fn theme_toggle_persists() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(contains("theme: light (toggle icon: moon)"));

    advision_cmd(home.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(contains("theme: dark (toggle icon: sun)"))
        .stderr(contains("Settings saved successfully!"));

    let prefs = preferences::load_at(home.path()).expect("load");
    assert_eq!(prefs.theme, Theme::Dark);
}

#[test]
fn accent_set_keeps_theme_and_rejects_unknown() {
    let home = TempDir::new().expect("home");
    preferences::set_theme_at(home.path(), Theme::Dark).expect("seed theme");

    advision_cmd(home.path())
        .args(["accent", "set", "purple"])
        .assert()
        .success()
        .stdout(contains("accent: purple #8b5cf6"));

    let prefs = preferences::load_at(home.path()).expect("load");
    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.accent, AccentColor::Purple);

    advision_cmd(home.path())
        .args(["accent", "set", "magenta"])
        .assert()
        .failure();
}

#[test]
fn accent_list_marks_current() {
    let home = TempDir::new().expect("home");
    let path = preferences::preferences_path_at(home.path());
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, "advision-accent: green\n").expect("write prefs");

    advision_cmd(home.path())
        .args(["accent", "list"])
        .assert()
        .success()
        .stdout(contains("* green"))
        .stdout(contains("  teal"));
}

// ---------------------------------------------------------------------------
// charts, report, leads
// ---------------------------------------------------------------------------

#[test]
fn charts_print_formatted_ticks() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .arg("charts")
        .assert()
        .success()
        .stdout(contains("$67k"))
        .stdout(contains("95%"))
        .stdout(contains("#FFC185"));

    advision_cmd(home.path())
        .args(["charts", "--only", "pie"])
        .assert()
        .failure()
        .stderr(contains("unknown chart 'pie'"));
}

#[test]
fn report_is_simulated() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .arg("report")
        .assert()
        .success()
        .stderr(contains("Report generated successfully!"));
}

#[test]
fn contact_lead_validation() {
    let home = TempDir::new().expect("home");
    advision_cmd(home.path())
        .args(["lead", "contact", "--name", "Ana", "--email", "ana@studio.io", "--message", "Hi"])
        .assert()
        .success()
        .stderr(contains("Message sent successfully!"));

    advision_cmd(home.path())
        .args(["lead", "contact", "--name", "Ana"])
        .assert()
        .failure()
        .stderr(contains("• Email is required"))
        .stderr(contains("• Message is required"));
}
