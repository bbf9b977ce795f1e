use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card position: {index}, hand holds {hand_size} cards")]
    InvalidCardIndex { index: usize, hand_size: usize },
    #[error("Unknown player {target} (table has {players} players)")]
    UnknownPlayer { target: usize, players: usize },
    #[error("Players cannot give hints to themselves")]
    SelfHint,
    #[error("No hint tokens remaining")]
    NoHintsRemaining,
    #[error("Player {target} has no cards to hint")]
    EmptyHand { target: usize },
    #[error("Invalid hint '{0}': expected a suit name or a value 1-5")]
    InvalidHintToken(String),
    #[error("Game is already over")]
    GameOver,
}

impl GameError {
    /// True for rejections of an otherwise well-formed hint request.
    pub fn is_hint_request(&self) -> bool {
        matches!(
            self,
            GameError::SelfHint | GameError::NoHintsRemaining | GameError::EmptyHand { .. }
        )
    }
}
