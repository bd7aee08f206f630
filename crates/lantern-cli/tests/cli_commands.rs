//! Integration tests for the lantern CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding a small world file.
fn test_world() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("world.json"),
        r#"{
    "title": "Test Woods",
    "locations": [
        { "id": "clearing", "name": "Clearing",
          "exits": [{ "direction": "north", "to": "forest" }] },
        { "id": "forest", "name": "Forest", "items": ["twig"],
          "exits": [{ "direction": "west", "to": "clearing" }] }
    ]
}
"#,
    )
    .unwrap();
    dir
}

fn lantern() -> Command {
    Command::cargo_bin("lantern").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn demo_world_plays_by_default() {
    lantern()
        .write_stdin("inv\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Lantern Woods")
                .and(predicate::str::contains("== Clearing =="))
                .and(predicate::str::contains("(None)"))
                .and(predicate::str::contains("Goodbye.")),
        );
}

#[test]
fn demo_world_can_be_won() {
    let script = "take hammer\ngo north\ngo east\nattack boulder with hammer\ngo east\nattack troll with hammer\nlook\n";
    lantern()
        .arg("play")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A boulder blocks the trail east.")
                .and(predicate::str::contains("== Cave =="))
                .and(predicate::str::contains("You win!"))
                .and(predicate::str::contains("I don't know how to do that.").not()),
        );
}

#[test]
fn play_world_file_scenario() {
    let dir = test_world();
    let world = dir.path().join("world.json");
    lantern()
        .args(["play", "--world", world.to_str().unwrap()])
        .write_stdin("go north\ngo south\ntake twig\ninv\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("== Forest ==")
                .and(predicate::str::contains("There is nothing in that direction."))
                .and(predicate::str::contains("You take the twig."))
                .and(predicate::str::contains("  twig")),
        );
}

#[test]
fn world_flag_works_without_subcommand() {
    let dir = test_world();
    let world = dir.path().join("world.json");
    lantern()
        .args(["--world", world.to_str().unwrap(), "--no-exits"])
        .write_stdin("go north\ntake twig\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Test Woods")
                .and(predicate::str::contains("== Forest =="))
                .and(predicate::str::contains("You take the twig."))
                .and(predicate::str::contains("Exits:").not()),
        );
}

#[test]
fn config_flag_works_without_subcommand() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("lantern.json");
    fs::write(&config, r#"{ "prompt": "your move? " }"#).unwrap();
    lantern()
        .args(["--config", config.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("your move? "));
}

#[test]
fn top_level_play_options_reject_a_subcommand() {
    let dir = test_world();
    let world = dir.path().join("world.json");
    lantern()
        .args(["--no-exits", "check", "--world", world.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn end_of_input_ends_the_session() {
    lantern().write_stdin("go north\n").assert().success();
}

#[test]
fn no_exits_flag_hides_exit_list() {
    lantern()
        .args(["play", "--no-exits"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exits:").not());
}

#[test]
fn config_file_is_applied() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("lantern.json");
    fs::write(&config, r#"{ "prompt": "what now? ", "banner": false }"#).unwrap();
    lantern()
        .args(["play", "--config", config.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("what now? ")
                .and(predicate::str::contains("The Lantern Woods").not()),
        );
}

#[test]
fn bad_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("lantern.json");
    fs::write(&config, r#"{ "prompt": 3 }"#).unwrap();
    lantern()
        .args(["play", "--config", config.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn missing_world_file_fails() {
    lantern()
        .args(["play", "--world", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read world file"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_location_count() {
    let dir = test_world();
    let world = dir.path().join("world.json");
    lantern()
        .args(["check", "--world", world.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Woods").and(predicate::str::contains("2 locations")));
}

#[test]
fn check_lists_duplicate_exits() {
    let dir = TempDir::new().unwrap();
    let world = dir.path().join("dup.json");
    fs::write(
        &world,
        r#"{ "locations": [ { "id": "hub", "exits": [
            { "direction": "n", "to": "hub" }, { "direction": "north", "to": "hub" } ] } ] }"#,
    )
    .unwrap();
    lantern()
        .args(["check", "--world", world.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("more than one exit north"));
}

#[test]
fn check_rejects_dangling_exit() {
    let dir = TempDir::new().unwrap();
    let world = dir.path().join("bad.json");
    fs::write(
        &world,
        r#"{ "locations": [ { "id": "a", "exits": [{ "direction": "east", "to": "b" }] } ] }"#,
    )
    .unwrap();
    lantern()
        .args(["check", "--world", world.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location \"b\""));
}
