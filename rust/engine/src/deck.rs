use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The draw pile. Built once in canonical order, shuffled with a seeded
/// ChaCha20 stream, then drained from the top; it is never refilled.
///
/// # Examples
///
/// ```
/// use hanabi_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(7);
/// let mut b = Deck::new_with_seed(7);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.draw(), b.draw());
/// assert_eq!(a.count(), 49);
/// ```
#[derive(Debug)]
pub struct Deck {
    /// Remaining cards; the top of the pile is the end of the vector
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(50),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.build();
        deck
    }

    /// A deck whose draws come out in exactly `draw_order`, first element first.
    pub fn stacked(draw_order: Vec<Card>) -> Self {
        let mut cards = draw_order;
        cards.reverse();
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    fn build(&mut self) {
        self.cards = full_deck();
    }

    /// Fisher–Yates over the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
