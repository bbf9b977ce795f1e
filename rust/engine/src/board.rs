use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, Suit, MAX_VALUE};
use crate::errors::GameError;

/// Misplays allowed before the fuse burns out.
pub const MAX_CHANCES: u8 = 3;
/// Hint tokens available at the start; discards never raise the pool above this.
pub const MAX_HINTS: u8 = 8;

/// Result of submitting a card to the fireworks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The card extended its suit stack
    Played,
    /// The card did not fit; it went to the discard pile and a chance was lost
    Misplayed,
}

/// Shared table state: one firework stack per suit, the discard pile, and
/// the chance and hint counters.
///
/// Stacks are addressed through [`Suit::index`], so every per-suit operation
/// goes through the same code path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Played cards per suit, strictly 1, 2, 3... from the bottom
    fireworks: [Vec<Card>; 5],
    /// Discarded and misplayed cards in the order they arrived
    discard: Vec<Card>,
    /// Remaining misplays before the game is lost
    chances: u8,
    /// Hint tokens available to spend
    hints: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            fireworks: Default::default(),
            discard: Vec::new(),
            chances: MAX_CHANCES,
            hints: MAX_HINTS,
        }
    }

    pub fn chances(&self) -> u8 {
        self.chances
    }

    pub fn hints(&self) -> u8 {
        self.hints
    }

    pub fn discards(&self) -> &[Card] {
        &self.discard
    }

    pub fn stack(&self, suit: Suit) -> &[Card] {
        &self.fireworks[suit.index()]
    }

    /// Value on top of the suit's stack, 0 when nothing has been played.
    pub fn top(&self, suit: Suit) -> u8 {
        self.stack(suit).last().map_or(0, |c| c.value)
    }

    /// Whether `value` may be placed on `stack`.
    pub fn check_next(stack: &[Card], value: u8) -> bool {
        match stack.last() {
            None => value == 1,
            Some(top) => value == top.value + 1 && value <= MAX_VALUE,
        }
    }

    pub fn check_play(&self, card: &Card) -> bool {
        Self::check_next(self.stack(card.suit), card.value)
    }

    /// Plays `card` if it fits; otherwise burns a chance and discards it.
    /// A misplay never returns a hint token.
    pub fn add(&mut self, card: Card) -> PlayOutcome {
        if self.check_play(&card) {
            self.fireworks[card.suit.index()].push(card);
            PlayOutcome::Played
        } else {
            self.chances = self.chances.saturating_sub(1);
            self.discard.push(card);
            PlayOutcome::Misplayed
        }
    }

    /// Discards `card` and recovers a hint token, capped at [`MAX_HINTS`].
    pub fn take_discard(&mut self, card: Card) {
        self.discard.push(card);
        if self.hints < MAX_HINTS {
            self.hints += 1;
        }
    }

    pub fn spend_hint(&mut self) -> Result<(), GameError> {
        if self.hints == 0 {
            return Err(GameError::NoHintsRemaining);
        }
        self.hints -= 1;
        Ok(())
    }

    pub fn check_complete(&self) -> bool {
        self.fireworks
            .iter()
            .all(|stack| stack.len() == MAX_VALUE as usize)
    }

    /// Sum of stack heights, 0 through 25.
    pub fn score(&self) -> u8 {
        all_suits().iter().map(|&s| self.top(s)).sum()
    }

    pub fn heights(&self) -> [u8; 5] {
        let mut out = [0u8; 5];
        for s in all_suits() {
            out[s.index()] = self.top(s);
        }
        out
    }
}
