//! Basic CLI tests for linkdeck
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

pub fn linkdeck(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linkdeck").unwrap();
    cmd.env_remove("LINKDECK_LOG")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("linkdeck"))
        .stdout(predicate::str::contains("--theme"));
}

#[test]
fn help_short_flag_shows_usage() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag_shows_version() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Options (Exit Code 3)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_3() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .arg("--unknown-option")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn invalid_theme_returns_exit_code_3() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .args(["--theme", "sepia"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid theme"));
    assert!(!temp.path().join("theme").exists());
}

#[test]
fn theme_without_value_returns_exit_code_3() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .arg("--theme")
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty().not());
}

// =============================================================================
// Default Data Set
// =============================================================================

#[test]
fn missing_defaults_file_returns_exit_code_2() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .args(["--defaults", "/nonexistent/bookmarks.json", "--list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("default bookmarks"));
}

#[test]
fn defaults_file_replaces_builtin_set() {
    let temp = TempDir::new().unwrap();
    let defaults = temp.path().join("mine.json");
    std::fs::write(
        &defaults,
        r#"[{"id":"solo","name":"Solo","github":{"title":"GitHub"},
            "website":{"title":"Website"},"storybooks":{"title":"Storybooks"}}]"#,
    )
    .unwrap();

    let data = TempDir::new().unwrap();
    linkdeck(&data)
        .arg("--defaults")
        .arg(&defaults)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("* solo\tSolo\t_self"));
}
