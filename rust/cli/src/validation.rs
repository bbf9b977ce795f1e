//! Input parsing and validation for the interactive game.
//!
//! Turns one line of operator input into an engine [`PlayerAction`]. Only
//! the shape of the command is checked here; whether the action is legal on
//! the current table is decided by the engine.
//!
//! Positions and seats are typed 1-based and converted to the engine's
//! 0-based indices.

use hanabi_engine::cards::HintToken;
use hanabi_engine::game::PLAYERS;
use hanabi_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

pub const USAGE: &str = "play <card>, discard <card>, hint <player> <suit|1-5>, q";

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "p N" or "play N" → play card N of your hand
/// - "d N" or "discard N" → discard card N
/// - "h P T" or "hint P T" → hint player P about suit or value T
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use hanabi_cli::validation::{parse_command, ParseResult};
/// use hanabi_engine::cards::{HintToken, Suit};
/// use hanabi_engine::player::PlayerAction;
///
/// assert_eq!(parse_command("p 3"), ParseResult::Action(PlayerAction::Play(2)));
/// assert_eq!(
///     parse_command("hint 2 blue"),
///     ParseResult::Action(PlayerAction::Hint { target: 1, token: HintToken::Suit(Suit::Blue) })
/// );
/// assert_eq!(parse_command("quit"), ParseResult::Quit);
/// assert!(matches!(parse_command("fold"), ParseResult::Invalid(_)));
/// ```
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "play" | "p" => match parse_position(parts.get(1).copied(), "Play") {
            Ok(i) => ParseResult::Action(PlayerAction::Play(i)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "discard" | "d" => match parse_position(parts.get(1).copied(), "Discard") {
            Ok(i) => ParseResult::Action(PlayerAction::Discard(i)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "hint" | "h" => {
            if parts.len() < 3 {
                return ParseResult::Invalid(
                    "Hint requires a player and a suit or value (e.g., 'hint 2 blue')".to_string(),
                );
            }
            let target = match parts[1].parse::<usize>() {
                Ok(p) if (1..=PLAYERS).contains(&p) => p - 1,
                _ => {
                    return ParseResult::Invalid(format!(
                        "Invalid player '{}': expected 1-{}",
                        parts[1], PLAYERS
                    ));
                }
            };
            match parts[2].parse::<HintToken>() {
                Ok(token) => ParseResult::Action(PlayerAction::Hint { target, token }),
                Err(e) => ParseResult::Invalid(e.to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: {}",
            parts[0], USAGE
        )),
    }
}

fn parse_position(arg: Option<&str>, verb: &str) -> Result<usize, String> {
    let Some(arg) = arg else {
        return Err(format!(
            "{} requires a card position (e.g., '{} 1')",
            verb,
            verb.to_lowercase()
        ));
    };
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Invalid card position '{}'", arg)),
    }
}

/// Validate that exactly three non-empty player names were supplied.
pub fn validate_player_names(names: &[String]) -> Result<[String; PLAYERS], String> {
    let trimmed: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
    if trimmed.iter().any(String::is_empty) {
        return Err("player names must not be empty".into());
    }
    <[String; PLAYERS]>::try_from(trimmed)
        .map_err(|v| format!("expected {} player names, got {}", PLAYERS, v.len()))
}
