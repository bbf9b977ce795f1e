use crate::helpers::assertions::assert_help_contains_commands;
use crate::helpers::cli_runner::CliRunner;

#[test]
fn a1_help_lists_every_command() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    assert_help_contains_commands(&res.stdout);
}

#[test]
fn a2_unknown_command_fails_with_usage() {
    let cli = CliRunner::new();
    let res = cli.run(&["shuffle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Usage: hanabi <command> [options]"));
    assert_help_contains_commands(&res.stderr);
}

#[test]
fn a3_deal_is_reproducible_for_a_seed() {
    let cli = CliRunner::new();
    let first = cli.run(&["deal", "--seed", "2024"]);
    let second = cli.run(&["deal", "--seed", "2024"]);
    assert_eq!(first.exit_code, 0, "stderr={}", first.stderr);
    assert_eq!(first.stdout, second.stdout);

    let hands: Vec<&str> = first
        .stdout
        .lines()
        .filter(|l| l.starts_with('P'))
        .collect();
    assert_eq!(hands.len(), 3);
    assert!(hands[0].starts_with("P1 Player 1:"));
}

#[test]
fn a4_bad_seed_is_a_usage_error() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal", "--seed", "many"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("--seed"));
}
