use crate::errors::GameError;
use crate::game::TurnEvent;
use crate::player::PlayerAction;
use crate::view::Snapshot;

/// Source of decisions for whoever holds the current turn.
///
/// [`crate::game::Game::run`] calls [`choose_action`](Controller::choose_action)
/// once per attempt. A rejected action is reported through
/// [`rejected`](Controller::rejected) and the same player is asked again; an
/// applied one is reported through [`applied`](Controller::applied).
///
/// # Example Implementation
///
/// ```rust
/// use hanabi_engine::controller::Controller;
/// use hanabi_engine::errors::GameError;
/// use hanabi_engine::game::TurnEvent;
/// use hanabi_engine::player::PlayerAction;
/// use hanabi_engine::view::Snapshot;
///
/// /// Always plays the newest card.
/// struct Reckless;
///
/// impl Controller for Reckless {
///     type Error = std::convert::Infallible;
///
///     fn choose_action(&mut self, view: &Snapshot) -> Result<Option<PlayerAction>, Self::Error> {
///         let held = view.current_hand().cards.len();
///         Ok(Some(PlayerAction::Play(held.saturating_sub(1))))
///     }
/// }
/// ```
pub trait Controller {
    type Error;

    /// The next action for `view.current`, or `None` to abandon the game.
    fn choose_action(&mut self, view: &Snapshot) -> Result<Option<PlayerAction>, Self::Error>;

    fn rejected(&mut self, _error: &GameError) -> Result<(), Self::Error> {
        Ok(())
    }

    fn applied(&mut self, _event: &TurnEvent) -> Result<(), Self::Error> {
        Ok(())
    }
}
