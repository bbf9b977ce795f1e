//! Deal command handler.
//!
//! Shuffles and deals a fresh game, then prints every hand face up along
//! with the opening board. Useful for checking what a seed produces before
//! playing it.

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use hanabi_engine::game::{Game, PLAYERS};
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &["Ann".into(), "Bob".into(), "Cid".into()], &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    players: &[String; PLAYERS],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let game = Game::new(players.clone(), Some(seed));
    let view = game.snapshot_for(None);

    writeln!(out, "Seed: {}", seed)?;
    for line in format_board(&view) {
        writeln!(out, "{}", line)?;
    }
    for hand in &view.hands {
        writeln!(out, "{}", format_hand(hand))?;
    }
    Ok(())
}
