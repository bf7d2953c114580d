//! Configuration layering: defaults < `CARDROOM_CONFIG` file < environment < flags.

mod helpers;

use helpers::{EnvGuard, run_cli};
use serial_test::serial;
use std::fs;

const KEYS: &[&str] = &[
    "CARDROOM_CONFIG",
    "CARDROOM_SEED",
    "CARDROOM_PLAYERS",
    "CARDROOM_STARTING_STACK",
    "CARDROOM_SMALL_BLIND",
    "CARDROOM_BIG_BLIND",
];

/// Clears every config variable, then applies `pairs`.
fn env(pairs: &[(&str, &str)]) -> EnvGuard {
    let mut all: Vec<(&str, &str)> = KEYS.iter().map(|k| (*k, "")).collect();
    all.extend_from_slice(pairs);
    EnvGuard::apply(&all)
}

fn seat_count(stdout: &str) -> usize {
    stdout.lines().filter(|l| l.starts_with("Seat ")).count()
}

#[test]
#[serial]
fn file_values_apply_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cardroom.toml");
    fs::write(
        &path,
        "players = 4\nseed = 11\nstarting_stack = 500\nsmall_blind = 10\nbig_blind = 20\n",
    )
    .unwrap();
    let _g = env(&[("CARDROOM_CONFIG", path.to_str().unwrap())]);

    let res = run_cli(&["deal"], "");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Seed: 11"));
    assert!(res.stdout.contains("Blinds: SB=10 BB=20"));
    assert_eq!(seat_count(&res.stdout), 4);
    assert!(res.stdout.contains("stack=500"));
}

#[test]
#[serial]
fn env_beats_file_and_flags_beat_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cardroom.toml");
    fs::write(&path, "players = 4\nseed = 11\n").unwrap();
    let _g = env(&[
        ("CARDROOM_CONFIG", path.to_str().unwrap()),
        ("CARDROOM_PLAYERS", "3"),
    ]);

    let res = run_cli(&["deal"], "");
    assert_eq!(res.exit_code, 0);
    assert_eq!(seat_count(&res.stdout), 3);

    let res = run_cli(&["deal", "--players", "6", "--seed", "12"], "");
    assert_eq!(res.exit_code, 0);
    assert_eq!(seat_count(&res.stdout), 6);
    assert!(res.stdout.contains("Seed: 12"));
}

#[test]
#[serial]
fn cfg_reports_value_sources() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cardroom.toml");
    fs::write(&path, "seed = 7\n").unwrap();
    let _g = env(&[
        ("CARDROOM_CONFIG", path.to_str().unwrap()),
        ("CARDROOM_BIG_BLIND", "50"),
    ]);

    let res = run_cli(&["cfg"], "");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["seed"]["value"], 7);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["big_blind"]["value"], 50);
    assert_eq!(json["big_blind"]["source"], "env");
    assert_eq!(json["players"]["source"], "default");
}

#[test]
#[serial]
fn invalid_environment_value_exits_two() {
    let _g = env(&[("CARDROOM_PLAYERS", "many")]);
    let res = run_cli(&["deal"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid players: many"), "{}", res.stderr);
}

#[test]
#[serial]
fn inverted_blinds_from_env_are_rejected() {
    let _g = env(&[("CARDROOM_SMALL_BLIND", "30")]);
    let res = run_cli(&["play", "--auto"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid blinds"), "{}", res.stderr);
}

#[test]
#[serial]
fn bad_config_files_exit_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cardroom.toml");
    fs::write(&path, "players = 4\nante = 1\n").unwrap();
    let _g = env(&[("CARDROOM_CONFIG", path.to_str().unwrap())]);
    let res = run_cli(&["deal"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"), "{}", res.stderr);

    let missing = dir.path().join("missing.toml");
    let _g2 = env(&[("CARDROOM_CONFIG", missing.to_str().unwrap())]);
    let res = run_cli(&["deal"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"), "{}", res.stderr);
}
