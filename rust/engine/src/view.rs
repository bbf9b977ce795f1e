//! Read-only table snapshots handed to controllers and renderers.
//!
//! A snapshot is taken from one seat's point of view: that seat's own cards
//! are reduced to their hint history, everything else is shown face up.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, HintMark};

/// One card as a particular viewer is allowed to see it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum CardView {
    /// The viewer's own card: only the hints it has received
    Concealed { hints: Vec<HintMark> },
    /// Someone else's card, face up
    Visible { card: Card, hints: Vec<HintMark> },
}

impl CardView {
    pub fn hints(&self) -> &[HintMark] {
        match self {
            CardView::Concealed { hints } | CardView::Visible { hints, .. } => hints,
        }
    }

    pub fn card(&self) -> Option<Card> {
        match self {
            CardView::Concealed { .. } => None,
            CardView::Visible { card, .. } => Some(*card),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandView {
    pub seat: usize,
    pub name: String,
    pub cards: Vec<CardView>,
}

/// Everything needed to draw the table for one turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1-based turn counter
    pub turn: u32,
    /// Seat of the player to act
    pub current: usize,
    /// Seat the hands were rendered for, if any
    pub viewer: Option<usize>,
    pub chances: u8,
    pub hints: u8,
    pub deck_remaining: usize,
    /// Top value per suit, indexed by [`crate::cards::Suit::index`]
    pub fireworks: [u8; 5],
    pub discards: Vec<Card>,
    pub hands: Vec<HandView>,
    /// Turns left once the deck has run out
    pub final_turns: Option<usize>,
}

impl Snapshot {
    pub fn current_hand(&self) -> &HandView {
        &self.hands[self.current]
    }
}
