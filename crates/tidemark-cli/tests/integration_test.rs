use std::fs;

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn tidemark() -> Command {
    Command::new(cargo::cargo_bin!("tidemark"))
}

#[test]
fn no_args_shows_usage() {
    tidemark()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag_mentions_subcommands() {
    tidemark()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("split"));
}

#[test]
fn init_creates_config_file() {
    let tmp = tempdir().unwrap();
    tidemark()
        .arg("init")
        .current_dir(tmp.path())
        .assert()
        .success();
    assert!(tmp.path().join("tidemark.json").exists());
}

#[test]
fn split_writes_individual_scripts() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("migrations")).unwrap();
    fs::write(
        tmp.path().join("migrations/COMBINED_ALL_MIGRATIONS.sql"),
        "-- Migration: 001_users.sql\nCREATE TABLE users (id int);\n-- Migration: 002_posts.sql\nCREATE TABLE posts (id int);",
    )
    .unwrap();

    tidemark()
        .arg("split")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Split into 2 migration scripts"));

    assert!(tmp.path().join("migrations/001_users.sql").exists());
    assert!(tmp.path().join("migrations/002_posts.sql").exists());
}

#[test]
fn status_reports_discovered_scripts() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("migrations")).unwrap();
    fs::write(tmp.path().join("migrations/001_users.sql"), "SELECT 1;").unwrap();

    tidemark()
        .arg("status")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("001_users.sql"));
}

#[test]
fn run_with_missing_directory_exits_nonzero() {
    let tmp = tempdir().unwrap();
    tidemark()
        .args(["run", "--host", "localhost", "--password", "unused"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("migrations directory not found"));
}

#[test]
fn apply_with_missing_file_exits_nonzero() {
    let tmp = tempdir().unwrap();
    tidemark()
        .args([
            "apply",
            "001_missing.sql",
            "--host",
            "localhost",
            "--password",
            "unused",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("migration script not found"));
}
