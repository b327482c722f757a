use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn feedstore_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("feedstore").unwrap();
    cmd.env("FEEDSTORE_DB_PATH", db_path);
    cmd
}

fn write_feed_list(dir: &TempDir, name: &str, json: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("feedstore")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_list_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("feeds.db");

    feedstore_cmd(db_path.to_str().unwrap())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No feeds stored."));
}

#[test]
fn test_add_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("feeds.db");
    let db_path = db_path.to_str().unwrap();

    feedstore_cmd(db_path)
        .args(["add", "--id", "1", "--title", "Tech", "--url", "http://a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored feed 1: Tech"));

    feedstore_cmd(db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Tech"))
        .stdout(predicate::str::contains("feedurl: http://a"));
}

#[test]
fn test_sync_replaces_stale_feeds() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("feeds.db");
    let db_path = db_path.to_str().unwrap();

    let first = write_feed_list(
        &temp_dir,
        "first.json",
        r#"{"feeds":[
            {"id":1,"title":"Tech","url":"http://a","faviconLink":"http://a/icon.png"},
            {"id":2,"title":"News","url":"http://b","faviconLink":"http://b/icon.png"}
        ]}"#,
    );
    let second = write_feed_list(
        &temp_dir,
        "second.json",
        r#"{"feeds":[{"id":2,"title":"News","url":"http://b","faviconLink":"http://b/icon.png"}]}"#,
    );

    feedstore_cmd(db_path)
        .args(["sync", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync complete: 2 upserted, 0 removed, 0 failed"));

    feedstore_cmd(db_path)
        .args(["sync", &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync complete: 1 upserted, 1 removed, 0 failed"));

    feedstore_cmd(db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. News"))
        .stdout(predicate::str::contains("feedicon: http://b/icon.png"))
        .stdout(predicate::str::contains("Tech").not());
}

#[test]
fn test_sync_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("feeds.db");

    feedstore_cmd(db_path.to_str().unwrap())
        .arg("sync")
        .write_stdin(r#"{"feeds":[{"id":5,"title":"Stdin","url":"http://c"}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync complete: 1 upserted"));
}

#[test]
fn test_sync_rejects_malformed_list() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("feeds.db");

    feedstore_cmd(db_path.to_str().unwrap())
        .arg("sync")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Feed list parsing failed"));
}

#[test]
fn test_unopenable_database_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("missing").join("feeds.db");

    feedstore_cmd(db_path.to_str().unwrap())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage unavailable"));
}
