#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAVE_FILE: &str = "aetherpet_game_state.json";

fn aetherpet(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aetherpet").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A temp directory holding a freshly hatched fire pet named Ember.
fn hatched() -> TempDir {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .args(["hatch", "Ember", "fire"])
        .assert()
        .success();
    dir
}

fn saved(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join(SAVE_FILE)).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_before_hatching_shows_intro() {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("AetherPet Genesis"))
        .stdout(predicate::str::contains("No pet yet"));
    assert!(!dir.path().join(SAVE_FILE).exists());
}

#[test]
fn status_after_hatching_shows_pet() {
    let dir = hatched();
    aetherpet(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ember the AetherPet"))
        .stdout(predicate::str::contains("Stage: baby"))
        .stdout(predicate::str::contains("Type: fire"))
        .stdout(predicate::str::contains("Hunger"));
}

// ---------------------------------------------------------------------------
// hatch
// ---------------------------------------------------------------------------

#[test]
fn hatch_writes_save_file() {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .args(["hatch", "Ember", "fire"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome to your new adventure with Ember!",
        ));

    let json = saved(dir.path());
    assert_eq!(json["petName"], "Ember");
    assert_eq!(json["petType"], "fire");
    assert_eq!(json["petStage"], "baby");
    assert_eq!(json["showIntro"], false);
}

#[test]
fn hatch_requires_a_type() {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .args(["hatch", "Ember", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please give your pet a name and choose a type!",
        ));
    assert!(!dir.path().join(SAVE_FILE).exists());
}

#[test]
fn hatch_requires_a_name() {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .args(["hatch", "  ", "water"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please give your pet a name"));
}

#[test]
fn hatch_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .args(["hatch", "Ember", "plasma"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown pet type"));
}

#[test]
fn hatch_twice_is_refused() {
    let dir = hatched();
    aetherpet(dir.path())
        .args(["hatch", "Rain", "water"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("aetherpet reset"));
    assert_eq!(saved(dir.path())["petName"], "Ember");
}

// ---------------------------------------------------------------------------
// care
// ---------------------------------------------------------------------------

#[test]
fn feed_before_hatching_fails() {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .arg("feed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No pet yet"));
}

#[test]
fn feed_raises_hunger() {
    let dir = hatched();
    aetherpet(dir.path())
        .arg("feed")
        .assert()
        .success()
        .stdout(predicate::str::contains("You fed your pet!"));

    let json = saved(dir.path());
    assert_eq!(json["stats"]["hunger"], 100.0);
    assert!(json["lastInteraction"]["feed"].is_string());
}

#[test]
fn play_costs_energy() {
    let dir = hatched();
    aetherpet(dir.path())
        .arg("play")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your pet enjoyed playtime!"));

    let json = saved(dir.path());
    assert_eq!(json["stats"]["happiness"], 100.0);
    assert_eq!(json["stats"]["energy"], 60.0);
}

#[test]
fn sleeping_pet_refuses_food() {
    let dir = hatched();
    aetherpet(dir.path())
        .arg("sleep")
        .assert()
        .success()
        .stdout(predicate::str::contains("sleeping peacefully"));

    aetherpet(dir.path())
        .arg("feed")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Your pet is sleeping! Wake them up first.",
        ));
    assert_eq!(saved(dir.path())["stats"]["hunger"], 70.0);

    aetherpet(dir.path())
        .arg("sleep")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your pet woke up!"));
    assert_eq!(saved(dir.path())["isSleeping"], false);
}

// ---------------------------------------------------------------------------
// advance
// ---------------------------------------------------------------------------

#[test]
fn advance_one_day_ages_pet() {
    let dir = hatched();
    aetherpet(dir.path())
        .args(["advance", "--ticks", "1440"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Advanced 1440 minutes"))
        .stdout(predicate::str::contains("1 day(s) old"));

    let json = saved(dir.path());
    assert_eq!(json["petAge"], 1);
    assert_eq!(json["gameTime"], 1440);
    assert_eq!(json["stats"]["hunger"], 0.0);
}

#[test]
fn advance_before_hatching_fails() {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .args(["advance", "--ticks", "5"])
        .assert()
        .failure();
    assert!(!dir.path().join(SAVE_FILE).exists());
}

// ---------------------------------------------------------------------------
// watch
// ---------------------------------------------------------------------------

#[test]
fn watch_prints_clock_updates() {
    let dir = hatched();
    aetherpet(dir.path())
        .args(["watch", "--seconds", "1", "--interval-ms", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[day 0 00:00]"))
        .stdout(predicate::str::contains("[day 0 00:01]"));

    let json = saved(dir.path());
    assert!(json["gameTime"].as_u64().unwrap() >= 1);
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn reset_removes_save() {
    let dir = hatched();
    assert!(dir.path().join(SAVE_FILE).exists());

    aetherpet(dir.path()).arg("reset").assert().success();
    assert!(!dir.path().join(SAVE_FILE).exists());

    aetherpet(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("AetherPet Genesis"));
}

#[test]
fn reset_without_save_is_fine() {
    let dir = TempDir::new().unwrap();
    aetherpet(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to reset"));
}
