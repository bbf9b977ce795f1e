use crate::helpers::cli_runner::CliRunner;

use serde_json::Value;
use std::io::Write;

fn config_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    file.write_all(body.as_bytes()).expect("write config");
    file
}

#[test]
fn c1_cfg_shows_defaults() {
    let cli = CliRunner::new();
    let res = cli.run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"].as_str(), Some("default"));
    assert_eq!(json["players"]["value"][0].as_str(), Some("Player 1"));
    assert_eq!(json["history"]["source"].as_str(), Some("default"));
}

#[test]
fn c2_env_beats_file() {
    let file = config_file("seed = 456\nplayers = [\"Ann\", \"Bob\", \"Cid\"]\n");
    let path = file.path().to_string_lossy().into_owned();
    let cli = CliRunner::new();

    let res = cli.run_with_env(&["cfg"], &[("HANABI_CONFIG", &path)]);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json["players"]["source"].as_str(), Some("file"));

    let res = cli.run_with_env(
        &["cfg"],
        &[("HANABI_CONFIG", &path), ("HANABI_SEED", "789")],
    );
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["players"]["value"][2].as_str(), Some("Cid"));
}

#[test]
fn c3_flags_beat_env() {
    let cli = CliRunner::new();
    let res = cli.run_full(
        &["play", "--seed", "5", "--players", "Ann,Bob,Cid"],
        &[("HANABI_SEED", "6"), ("HANABI_PLAYERS", "X,Y,Z")],
        "q\n",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("hanabi: seed=5 players=Ann,Bob,Cid"));

    let res = cli.run_full(&["play"], &[("HANABI_SEED", "6")], "q\n");
    assert!(res.stdout.contains("hanabi: seed=6 "));
}

#[test]
fn c4_broken_config_file_is_reported() {
    let file = config_file("seed = \"not a number\"\n");
    let path = file.path().to_string_lossy().into_owned();
    let cli = CliRunner::new();

    for args in [&["cfg"][..], &["deal"][..]] {
        let res = cli.run_with_env(args, &[("HANABI_CONFIG", &path)]);
        assert_eq!(res.exit_code, 2);
        assert!(
            res.stderr.contains("Error: Configuration error"),
            "stderr={}",
            res.stderr
        );
    }
}
