use crate::helpers::assertions::{assert_valid_game_id, parse_jsonl};
use crate::helpers::cli_runner::CliRunner;

#[test]
fn g1_quit_abandons_the_game() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--seed", "42"], "quit\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("=== Turn 1: Player 1 to act ==="));
    assert!(res.stdout.contains("Fireworks: B0 G0 R0 W0 Y0"));
    assert!(res.stdout.contains("Chances: 3  Hints: 8  Deck: 35"));
    assert!(res.stdout.contains("Game abandoned."));
}

#[test]
fn g2_invalid_commands_are_reported_and_reprompted() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--seed", "42"],
        "jump\nhint 9 red\nhint 1 red\nq\n",
    );
    assert_eq!(res.exit_code, 0);
    let errors: Vec<&str> = res
        .stderr
        .lines()
        .filter(|l| l.starts_with("Error: "))
        .collect();
    assert_eq!(errors.len(), 3, "stderr={}", res.stderr);
    assert!(errors[2].contains("cannot give hints to themselves"));
    assert_eq!(res.stdout.matches("Player 1> ").count(), 4);
}

#[test]
fn g3_turns_rotate_between_seats() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--seed", "42", "--players", "Ann,Bob,Cid"],
        "h 2 1\nh 3 red\nd 1\nq\n",
    );
    assert_eq!(res.exit_code, 0);
    let order: Vec<usize> = ["Ann> ", "Bob> ", "Cid> "]
        .iter()
        .map(|p| res.stdout.find(p).expect("prompt shown"))
        .collect();
    assert!(order[0] < order[1] && order[1] < order[2]);
    assert!(res.stdout.contains("=== Turn 4: Ann to act ==="));
    assert!(res.stdout.contains("Chances: 3  Hints: 7  Deck: 34"));
}

#[test]
fn g4_full_game_ends_with_banner_and_acknowledgment() {
    let cli = CliRunner::new();
    let input = "p 1\n".repeat(80);
    let res = cli.run_with_input(&["play", "--seed", "99"], &input);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(
        ["YOU WIN!", "YOU LOSE!", "GAME OVER"]
            .iter()
            .any(|b| res.stdout.contains(b)),
        "no banner in stdout"
    );
    assert!(res.stdout.trim_end().ends_with("Press Enter to exit"));
}

#[test]
fn g5_history_records_the_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let cli = CliRunner::new();

    let first = cli.run_with_input(
        &["play", "--seed", "8", "--history", &path_str],
        "d 2\nq\n",
    );
    assert_eq!(first.exit_code, 0, "stderr={}", first.stderr);
    let second = cli.run_full(
        &["play", "--seed", "9"],
        &[("HANABI_HISTORY", &path_str)],
        "q\n",
    );
    assert_eq!(second.exit_code, 0);

    let records = parse_jsonl(&std::fs::read_to_string(&path).unwrap());
    assert_eq!(records.len(), 2);
    let game = &records[0];
    assert_valid_game_id(game["game_id"].as_str().unwrap());
    assert_eq!(game["seed"].as_u64(), Some(8));
    assert_eq!(game["players"][0].as_str(), Some("Player 1"));
    assert_eq!(game["turns"][0]["result"]["kind"].as_str(), Some("discarded"));
    assert!(game["ts"].as_str().is_some());
    assert_eq!(records[1]["seed"].as_u64(), Some(9));
    assert_valid_game_id(records[1]["game_id"].as_str().unwrap());
    assert_ne!(records[0]["game_id"], records[1]["game_id"]);
}

#[test]
fn g6_debug_log_goes_to_stderr() {
    let cli = CliRunner::new();
    let res = cli.run_full(
        &["play", "--seed", "4"],
        &[("HANABI_LOG", "hanabi_engine=debug")],
        "d 1\nq\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("turn applied"), "stderr={}", res.stderr);
    assert!(!res.stdout.contains("turn applied"));
}
