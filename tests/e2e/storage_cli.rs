//! Storage behavior observed through the non-interactive modes

use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_basic::linkdeck;

#[test]
fn list_initializes_storage_on_first_run() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("* react\tCarbon React\t_blank"));
    assert!(temp.path().join("bookmarks.json").exists());
}

#[test]
fn corrupt_bookmarks_are_healed() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks.json");
    std::fs::write(&file, "[{ broken").unwrap();

    linkdeck(&temp)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("react"));

    let healed = std::fs::read_to_string(&file).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&healed).unwrap();
    assert!(parsed.is_array());
}

#[test]
fn theme_flag_is_persisted_and_rendered() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp)
        .args(["--theme", "g90", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme-zone-g90"))
        .stdout(predicate::str::contains("#main-tabs"));
    assert_eq!(
        std::fs::read_to_string(temp.path().join("theme")).unwrap(),
        "g90"
    );
}

#[test]
fn dump_is_stable_across_runs() {
    let temp = TempDir::new().unwrap();
    let first = linkdeck(&temp).arg("--dump").output().unwrap();
    let second = linkdeck(&temp).arg("--dump").output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn reset_removes_stored_data() {
    let temp = TempDir::new().unwrap();
    linkdeck(&temp).args(["--theme", "g10", "--list"]).assert().success();
    assert!(temp.path().join("theme").exists());

    linkdeck(&temp)
        .arg("--reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed stored data"));
    assert!(!temp.path().join("theme").exists());
    assert!(!temp.path().join("bookmarks.json").exists());
}
