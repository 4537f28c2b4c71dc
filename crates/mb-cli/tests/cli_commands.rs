//! Integration tests for the mb-cli binary commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mb() -> Command {
    Command::cargo_bin("mb").unwrap()
}

/// Write the built-in game data into a temp directory.
fn data_file() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");
    mb().arg("init").arg(&path).assert().success();
    (dir, path)
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");

    mb().arg("init")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created game data"));

    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("Saint Bernard"));
    assert!(json.contains("Coral Snake"));
}

#[test]
fn init_refuses_to_overwrite() {
    let (_dir, path) = data_file();
    mb().arg("init")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_for_fresh_data() {
    let (_dir, path) = data_file();
    mb().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains(
            "8 creatures (6 burrowers, 2 serpents), 3 actions, 20 outcomes",
        ));
}

#[test]
fn check_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    mb().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn check_rejects_empty_catalog() {
    let (_dir, path) = data_file();
    let json = fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["catalog"]["actions"] = serde_json::json!([]);
    fs::write(&path, value.to_string()).unwrap();

    mb().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no actions"));
}

#[test]
fn check_rejects_table_gap() {
    let (_dir, path) = data_file();
    let json = fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["table"].as_array_mut().unwrap().truncate(1);
    fs::write(&path, value.to_string()).unwrap();

    mb().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no outcome defined"));
}

#[test]
fn check_missing_file() {
    mb().arg("check")
        .arg("/definitely/not/here.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("here.json"));
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_lists_actions() {
    mb().arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Water"))
        .stdout(predicate::str::contains("agitate"))
        .stdout(predicate::str::contains("3 actions, 8 creatures"));
}

#[test]
fn catalog_reads_data_file() {
    let (_dir, path) = data_file();
    mb().args(["catalog", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shake"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_guess_serpent_wins() {
    mb().args(["play", "--serpent-chance", "100", "--seed", "7"])
        .write_stdin("guess serpent\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You got it! It was a snake."))
        .stdout(predicate::str::contains("It was: "));
}

#[test]
fn play_guess_serpent_loses_against_burrowers() {
    mb().args(["play", "--serpent-chance", "0"])
        .write_stdin("guess snake\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong! It was a dog"))
        .stdout(predicate::str::contains("(burrower, "));
}

#[test]
fn play_reaching_into_a_serpent_box() {
    mb().args(["play", "--serpent-chance", "100"])
        .write_stdin("hand\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You were attacked!"))
        .stdout(predicate::str::contains("bitten by a snake"));
}

#[test]
fn play_status_and_quit() {
    mb().args(["play", "--budget", "4", "--max-stress", "80"])
        .write_stdin("status\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action points: 4 | Stress: 0/80 (calm)"))
        .stdout(predicate::str::contains("You walk away from the box."));
}

#[test]
fn play_recovers_from_bad_input() {
    mb().args(["play", "--budget", "0", "--serpent-chance", "0"])
        .write_stdin("juggle\nwater\nguess burrower huge docile\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown action"))
        .stdout(predicate::str::contains("not enough action points"))
        .stdout(predicate::str::contains("unknown size 'huge'"));
}

#[test]
fn play_stress_runs_out() {
    mb().args(["play", "--serpent-chance", "0", "--max-stress", "1", "--budget", "10"])
        .write_stdin("shake\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ran away"));
}

#[test]
fn play_rejects_bad_probability() {
    mb().args(["play", "--serpent-chance", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
