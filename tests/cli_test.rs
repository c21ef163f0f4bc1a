/// CLI binary integration tests using assert_cmd
///
/// Each test points the binary at its own temporary storage directory
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_random-content"));
    cmd.env("RANDOM_CONTENT_DIR", data_dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let data_dir = TempDir::new().unwrap();
    cmd(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_add_then_list() {
    let data_dir = TempDir::new().unwrap();

    cmd(&data_dir)
        .args(["add", "--category", "house", "3BR", "house", "near", "lake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added #1 [House] 3BR house near lake"));
    cmd(&data_dir)
        .args(["add", "-c", "apartment", "Studio flat downtown"])
        .assert()
        .success();

    cmd(&data_dir)
        .args(["list", "--category", "house"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Content Library (1)"))
        .stdout(predicate::str::contains("3BR house near lake"))
        .stdout(predicate::str::contains("Studio flat").not());

    assert!(data_dir.path().join("contentData.json").exists());
}

#[test]
fn test_cli_add_blank_fails() {
    let data_dir = TempDir::new().unwrap();
    cmd(&data_dir)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Content text cannot be empty"));
}

#[test]
fn test_cli_remove() {
    let data_dir = TempDir::new().unwrap();
    cmd(&data_dir).args(["add", "Corner lot", "-c", "land"]).assert().success();

    cmd(&data_dir).args(["remove", "1"]).assert().success().stdout(predicate::str::contains("Removed #1"));
    cmd(&data_dir)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No item with id 1"));
    cmd(&data_dir).arg("list").assert().success().stdout(predicate::str::contains("No content found"));
}

#[test]
fn test_cli_random_clamps_to_available() {
    let data_dir = TempDir::new().unwrap();
    cmd(&data_dir).args(["add", "-c", "land", "Two acres"]).assert().success();
    cmd(&data_dir).args(["add", "-c", "land", "Hillside plot"]).assert().success();
    cmd(&data_dir).args(["add", "-c", "house", "Cottage"]).assert().success();

    cmd(&data_dir)
        .args(["random", "-c", "land", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available: 2 items"))
        .stdout(predicate::str::contains("Two acres"))
        .stdout(predicate::str::contains("Hillside plot"))
        .stdout(predicate::str::contains("Cottage").not());
}

#[test]
fn test_cli_random_invalid_quantity_picks_one() {
    let data_dir = TempDir::new().unwrap();
    cmd(&data_dir).args(["add", "Only one"]).assert().success();

    cmd(&data_dir)
        .args(["random", "-n", "lots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Only one"));
}

#[test]
fn test_cli_malformed_storage_starts_empty() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("contentData.json"), "not json").unwrap();

    cmd(&data_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total items: 0"));
}

#[test]
fn test_cli_stats_counts_categories() {
    let data_dir = TempDir::new().unwrap();
    cmd(&data_dir).args(["add", "-c", "apartment", "Loft"]).assert().success();
    cmd(&data_dir).args(["add", "-c", "apartment", "Studio"]).assert().success();

    cmd(&data_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total items: 2"))
        .stdout(predicate::str::contains("Flat/Apartment: 2"))
        .stdout(predicate::str::contains("Land: 0"));
}

#[test]
fn test_cli_invalid_sort_option() {
    let data_dir = TempDir::new().unwrap();
    cmd(&data_dir)
        .args(["list", "--sort", "size-asc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort option"));
}
