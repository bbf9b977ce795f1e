//! # Play Command
//!
//! Interactive three-seat Hanabi for a single operator at one terminal.
//!
//! Each turn the table is rendered with the acting player's hand concealed,
//! then one command is read from stdin. Malformed input and actions the
//! engine rejects are reported on stderr and the same player is asked
//! again; nothing on the table changes until an action is accepted.
//!
//! ## Features
//!
//! - Short and long command forms (`p 1` / `play 1`, `h 2 red` / `hint 2 red`)
//! - Graceful quit handling (`q`, `quit`, or end of input abandons the game)
//! - Win/loss banner followed by a final "Press Enter to exit" acknowledgment
//! - Optional JSONL game history for later inspection

use crate::error::CliError;
use crate::formatters::{format_event, format_outcome, format_table};
use crate::io_utils::{prompt_line, read_stdin_line};
use crate::ui;
use crate::validation::{ParseResult, USAGE, parse_command};
use hanabi_engine::controller::Controller;
use hanabi_engine::errors::GameError;
use hanabi_engine::game::{Game, PLAYERS, TurnEvent};
use hanabi_engine::logger::GameLogger;
use hanabi_engine::player::PlayerAction;
use hanabi_engine::view::Snapshot;
use std::io::{BufRead, Write};

/// Resolved settings for one interactive game.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub players: [String; PLAYERS],
    /// Append the finished game to this JSONL file
    pub history: Option<String>,
}

/// Handle the play command: run one game to completion or abandonment.
///
/// # Returns
///
/// * `Ok(())` when the game finished or the operator quit
/// * `Err(CliError)` on I/O failures or when the history file cannot be written
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut game = Game::new(opts.players.clone(), Some(seed));

    writeln!(
        out,
        "hanabi: seed={} players={}",
        seed,
        opts.players.join(",")
    )?;
    writeln!(out, "Commands: {}", USAGE)?;

    let mut controller =
        TerminalController::new(opts.players.to_vec(), &mut *out, &mut *err, &mut *stdin);
    let outcome = game.run(&mut controller)?;

    match outcome {
        Some(outcome) => {
            ui::write_banner(out, &format_outcome(&outcome))?;
            write!(out, "Press Enter to exit")?;
            out.flush()?;
            // EOF counts as the acknowledgment.
            let _ = read_stdin_line(stdin);
            writeln!(out)?;
        }
        None => writeln!(out, "Game abandoned.")?,
    }

    if let Some(path) = &opts.history {
        let mut logger = GameLogger::create(path)?;
        let id = logger.next_id();
        logger.write(&game.record(id))?;
    }
    Ok(())
}

/// Reads actions for every seat from one terminal.
struct TerminalController<'a> {
    names: Vec<String>,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    stdin: &'a mut dyn BufRead,
    /// Skip the table render when re-prompting after a rejection
    show_table: bool,
}

impl<'a> TerminalController<'a> {
    fn new(
        names: Vec<String>,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
        stdin: &'a mut dyn BufRead,
    ) -> Self {
        Self {
            names,
            out,
            err,
            stdin,
            show_table: true,
        }
    }
}

impl Controller for TerminalController<'_> {
    type Error = CliError;

    fn choose_action(&mut self, view: &Snapshot) -> Result<Option<PlayerAction>, CliError> {
        if self.show_table {
            writeln!(self.out)?;
            for line in format_table(view) {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.show_table = true;

        let prompt = format!("{}> ", view.current_hand().name);
        loop {
            let Some(input) = prompt_line(self.out, self.stdin, &prompt)? else {
                writeln!(self.out)?;
                return Ok(None);
            };
            match parse_command(&input) {
                ParseResult::Action(action) => return Ok(Some(action)),
                ParseResult::Quit => return Ok(None),
                ParseResult::Invalid(msg) => ui::write_error(self.err, &msg)?,
            }
        }
    }

    fn rejected(&mut self, error: &GameError) -> Result<(), CliError> {
        self.show_table = false;
        let kind = if error.is_hint_request() {
            "Hint refused"
        } else {
            "Invalid action"
        };
        ui::write_error(self.err, &format!("{}: {}", kind, error))?;
        Ok(())
    }

    fn applied(&mut self, event: &TurnEvent) -> Result<(), CliError> {
        writeln!(self.out, "{}", format_event(event, &self.names))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn opts(seed: u64) -> PlayOptions {
        PlayOptions {
            seed: Some(seed),
            players: ["Ann".into(), "Bob".into(), "Cid".into()],
            history: None,
        }
    }

    fn play(opts: PlayOptions, input: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        handle_play_command(opts, &mut out, &mut err, &mut stdin).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_quit_immediately_abandons() {
        let (out, err) = play(opts(42), "q\n");
        assert!(out.contains("hanabi: seed=42 players=Ann,Bob,Cid"));
        assert!(out.contains("=== Turn 1: Ann to act ==="));
        assert!(out.contains("P1 Ann (you): [1] ??"));
        assert!(out.contains("Game abandoned."));
        assert!(err.is_empty());
    }

    #[test]
    fn test_eof_abandons() {
        let (out, _) = play(opts(42), "");
        assert!(out.contains("Game abandoned."));
        assert!(!out.contains("Press Enter"));
    }

    #[test]
    fn test_bad_input_reprompts_same_player() {
        let (out, err) = play(opts(7), "fold\np 9\nq\n");
        assert!(err.contains("Error: Unrecognized action 'fold'"));
        assert!(err.contains("Error: Invalid action"));
        assert_eq!(out.matches("Ann> ").count(), 3);
        assert!(!out.contains("Bob> "));
    }

    #[test]
    fn test_non_utf8_line_is_reported_and_reprompted() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"d 1\nq\n");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input);
        handle_play_command(opts(7), &mut out, &mut err, &mut stdin).unwrap();
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();

        assert!(err.contains("Error: Unrecognized action"));
        assert_eq!(out.matches("Ann> ").count(), 2);
        assert!(out.contains("Ann discarded"));
        assert!(out.contains("=== Turn 2: Bob to act ==="));
        assert!(out.contains("Game abandoned."));
    }

    #[test]
    fn test_self_hint_is_rejected_without_rerender() {
        let (out, err) = play(opts(7), "h 1 red\nq\n");
        assert!(err.contains("Error: Hint refused: Players cannot give hints to themselves"));
        assert_eq!(out.matches("=== Turn 1").count(), 1);
    }

    #[test]
    fn test_accepted_action_passes_turn() {
        let (out, _) = play(opts(7), "h 2 1\nq\n");
        assert!(out.contains("Ann hinted Bob: 1 ("));
        assert!(out.contains("=== Turn 2: Bob to act ==="));
        assert!(out.contains("Hints: 7"));
    }

    #[test]
    fn test_game_runs_to_banner_and_waits_for_enter() {
        let input = "p 1\n".repeat(60);
        let (out, _) = play(opts(11), &input);
        assert!(
            out.contains("YOU WIN!") || out.contains("YOU LOSE!") || out.contains("GAME OVER"),
            "no end banner in output"
        );
        assert!(out.contains("Press Enter to exit"));
        assert!(!out.contains("Game abandoned."));
    }

    #[test]
    fn test_history_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games/history.jsonl");
        let mut o = opts(5);
        o.history = Some(path.to_string_lossy().into_owned());

        play(o, "d 1\nq\n");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        let record: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(record["seed"], 5);
        assert_eq!(record["turns"].as_array().map(Vec::len), Some(1));
        assert!(record["outcome"].is_null());
    }
}
