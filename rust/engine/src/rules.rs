use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// An action that has passed every legality check for the current table.
///
/// Only [`validate_action`] can build one, so code that applies actions never
/// sees an unchecked request and never has to undo a half-applied turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedAction(A);

impl ValidatedAction {
    pub fn action(&self) -> A {
        self.0
    }
}

/// Validates a player action against the table before anything is mutated.
///
/// # Arguments
///
/// * `actor` - Seat of the player taking the turn
/// * `hand_sizes` - Current hand size for every seat, indexed by seat
/// * `hints` - Hint tokens left on the board
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::InvalidCardIndex`] - Play/discard position outside the actor's hand
/// - [`GameError::UnknownPlayer`] - Hint target is not a seat at the table
/// - [`GameError::SelfHint`] - Hint aimed at the actor
/// - [`GameError::NoHintsRemaining`] - Hint with an empty token pool
/// - [`GameError::EmptyHand`] - Hint aimed at a player holding nothing
///
/// A play that does not fit the fireworks is legal here; its penalty is part
/// of the game, not a rejection.
///
/// # Examples
///
/// ```
/// use hanabi_engine::cards::HintToken;
/// use hanabi_engine::errors::GameError;
/// use hanabi_engine::player::PlayerAction;
/// use hanabi_engine::rules::validate_action;
///
/// let hands = [5, 5, 5];
/// assert!(validate_action(0, &hands, 8, PlayerAction::Play(4)).is_ok());
/// assert!(matches!(
///     validate_action(0, &hands, 8, PlayerAction::Discard(5)),
///     Err(GameError::InvalidCardIndex { .. })
/// ));
///
/// let hint = PlayerAction::Hint { target: 0, token: HintToken::Value(1) };
/// assert_eq!(validate_action(0, &hands, 8, hint), Err(GameError::SelfHint));
/// ```
pub fn validate_action(
    actor: usize,
    hand_sizes: &[usize],
    hints: u8,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let players = hand_sizes.len();
    let own = *hand_sizes.get(actor).ok_or(GameError::UnknownPlayer {
        target: actor,
        players,
    })?;
    match action {
        A::Play(index) | A::Discard(index) => {
            if index >= own {
                return Err(GameError::InvalidCardIndex {
                    index,
                    hand_size: own,
                });
            }
        }
        A::Hint { target, .. } => {
            if target >= players {
                return Err(GameError::UnknownPlayer { target, players });
            }
            if target == actor {
                return Err(GameError::SelfHint);
            }
            if hints == 0 {
                return Err(GameError::NoHintsRemaining);
            }
            if hand_sizes[target] == 0 {
                return Err(GameError::EmptyHand { target });
            }
        }
    }
    Ok(ValidatedAction(action))
}
