use serde::{Deserialize, Serialize};

use crate::board::{Board, PlayOutcome};
use crate::cards::{Card, HandCard, HintToken};
use crate::deck::Deck;
use crate::errors::GameError;

/// Cards each player holds while the deck lasts.
pub const HAND_SIZE: usize = 5;

/// Represents a turn action chosen by the acting player.
/// Card positions and player seats are 0-based inside the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play the card at this hand position onto the fireworks
    Play(usize),
    /// Discard the card at this hand position to recover a hint token
    Discard(usize),
    /// Annotate every card in the target seat's hand
    Hint { target: usize, token: HintToken },
}

/// Represents a seated player and the cards they hold.
/// The hand is owned exclusively until a card moves to the board or discard pile.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name
    name: String,
    /// Seat number, 0-based, fixed for the whole game
    position: usize,
    /// Held cards with their accumulated hint marks
    hand: Vec<HandCard>,
}

impl Player {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            hand: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn position(&self) -> usize {
        self.position
    }
    pub fn hand(&self) -> &[HandCard] {
        &self.hand
    }
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Takes the top card of `deck` into the hand. Returns false and leaves
    /// the hand untouched when the deck is empty.
    pub fn draw(&mut self, deck: &mut Deck) -> bool {
        match deck.draw() {
            Some(card) => {
                self.hand.push(HandCard::new(card));
                true
            }
            None => false,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index >= self.hand.len() {
            return Err(GameError::InvalidCardIndex {
                index,
                hand_size: self.hand.len(),
            });
        }
        Ok(())
    }

    pub fn play_card(
        &mut self,
        board: &mut Board,
        deck: &mut Deck,
        index: usize,
    ) -> Result<(Card, PlayOutcome), GameError> {
        self.check_index(index)?;
        let card = self.hand.remove(index).card;
        let outcome = board.add(card);
        self.draw(deck);
        Ok((card, outcome))
    }

    pub fn discard_card(
        &mut self,
        board: &mut Board,
        deck: &mut Deck,
        index: usize,
    ) -> Result<Card, GameError> {
        self.check_index(index)?;
        let card = self.hand.remove(index).card;
        board.take_discard(card);
        self.draw(deck);
        Ok(card)
    }

    /// Marks every card in `receiver`'s hand as matching or not matching
    /// `token` and spends one hint token. Returns how many cards matched.
    pub fn give_hint(
        &self,
        board: &mut Board,
        receiver: &mut Player,
        token: HintToken,
    ) -> Result<usize, GameError> {
        if board.hints() < 1 {
            return Err(GameError::NoHintsRemaining);
        }
        if receiver.hand.is_empty() {
            return Err(GameError::EmptyHand {
                target: receiver.position,
            });
        }
        board.spend_hint()?;
        let matched = receiver
            .hand
            .iter_mut()
            .map(|hc| hc.annotate(&token))
            .filter(|m| m.is_positive())
            .count();
        Ok(matched)
    }
}
