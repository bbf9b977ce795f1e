//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` spawns the built `hanabi` binary with a clean
//!   `HANABI_*` environment, optional piped stdin, and captures exit code,
//!   stdout and stderr.
//! - `assertions`: shared checks for help text and JSONL history files.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let cli = CliRunner::new();
//! let res = cli.run_with_input(&["play", "--seed", "1"], "q\n");
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod assertions;
pub mod cli_runner;
