#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd(temp: &TempDir) -> Command {
    let mut c = Command::cargo_bin("notekeep").unwrap();
    c.arg("--data-dir").arg(temp.path()).env("NO_COLOR", "1");
    c
}

#[test]
fn create_then_list() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["create", "Groceries", "<p>eggs</p>", "--tag", "errand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added successfully!"));

    cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries eggs #errand"));
}

#[test]
fn empty_list_messages_depend_on_search() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));

    cmd(&temp)
        .args(["search", "anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes match your search."));
}

#[test]
fn archive_hides_note_from_default_list() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["create", "Old plan"]).assert().success();
    cmd(&temp).args(["archive", "1"]).assert().success();

    cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Old plan").not());
    cmd(&temp)
        .args(["list", "--filter", "archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old plan"));
}

#[test]
fn missing_note_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["pin", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 42 not found"));
}

#[test]
fn edit_attaches_and_removes_image() {
    let temp = TempDir::new().unwrap();
    let image = temp.path().join("dot.gif");
    fs::write(&image, b"GIF89a").unwrap();

    cmd(&temp).args(["create", "Pic"]).assert().success();
    cmd(&temp)
        .args(["edit", "1", "--image"])
        .arg(&image)
        .assert()
        .success();
    let notes = fs::read_to_string(temp.path().join("notes.json")).unwrap();
    assert!(notes.contains("data:image/gif;base64,R0lGODlh"));

    cmd(&temp)
        .args(["edit", "1", "--remove-image"])
        .assert()
        .success();
    let notes = fs::read_to_string(temp.path().join("notes.json")).unwrap();
    assert!(notes.contains("\"image\":null"));
}

#[test]
fn bad_sort_order_fails() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["sort", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort order"));
}

#[test]
fn categories_and_theme_persist() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["category", "add", "Recipes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category added: recipes"));
    cmd(&temp)
        .arg("category")
        .assert()
        .success()
        .stdout(predicate::str::contains("recipes"));

    cmd(&temp).args(["theme", "dark"]).assert().success();
    cmd(&temp)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));
}

#[test]
fn config_round_trip() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["config", "default-sort", "oldest"])
        .assert()
        .success();
    cmd(&temp)
        .args(["config", "default-sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-sort = oldest"));
}

#[test]
fn dictate_appends_to_content() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["create", "Memo", "call"]).assert().success();
    cmd(&temp)
        .args(["dictate", "1", "the", "bank"])
        .assert()
        .success();
    cmd(&temp)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("call the bank"));
}
