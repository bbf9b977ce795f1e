//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! configuration with the source of each value (default, file, or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "players": {
//!     "value": ["Player 1", "Player 2", "Player 3"],
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;

    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "history": {
            "value": config.history,
            "source": sources.history,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
