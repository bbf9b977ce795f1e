//! # Hanabi CLI Library
//!
//! Text front end for the `hanabi_engine` rule engine: a clap command tree,
//! layered configuration, input parsing, and table rendering.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same
//! with an explicit stdin, which is how the interactive game is tested.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["hanabi", "play", "--seed", "42"];
//! let code = hanabi_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game, all three seats driven from the terminal
//! - `deal`: Deal a game and show every hand
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HanabiCli};
use commands::{PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Reads interactive input from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["hanabi", "deal", "--seed", "42"];
/// let code = hanabi_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Supports both TTY and piped stdin
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading operator input from `stdin`.
///
/// # Available Commands
///
/// - `play [--seed N] [--players A,B,C] [--history FILE]`: Interactive game
/// - `deal [--seed N]`: Deal and print every hand
/// - `cfg`: Display configuration settings
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HanabiCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err);
                    write_or_exit!(err, "Hanabi CLI");
                    write_or_exit!(err, "Usage: hanabi <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: hanabi --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            seed,
            players,
            history,
        } => resolve_play_options(seed, players, history)
            .and_then(|opts| handle_play_command(opts, out, err, stdin)),
        Commands::Deal { seed } => resolve_play_options(seed, None, None)
            .and_then(|opts| handle_deal_command(opts.seed, &opts.players, out)),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Merge command-line flags over the resolved configuration.
fn resolve_play_options(
    seed: Option<u64>,
    players: Option<Vec<String>>,
    history: Option<String>,
) -> Result<PlayOptions, CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let names = players.unwrap_or(cfg.players);
    let players = validation::validate_player_names(&names).map_err(CliError::InvalidInput)?;
    Ok(PlayOptions {
        seed: seed.or(cfg.seed),
        players,
        history: history.or(cfg.history),
    })
}
