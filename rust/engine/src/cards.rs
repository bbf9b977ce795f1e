use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;

/// Highest card value in every suit.
pub const MAX_VALUE: u8 = 5;

/// Represents one of the five firework colors in a Hanabi deck.
/// Each suit owns exactly one stack on the [`crate::board::Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Blue fireworks
    Blue,
    /// Green fireworks
    Green,
    /// Red fireworks
    Red,
    /// White fireworks
    White,
    /// Yellow fireworks
    Yellow,
}

impl Suit {
    /// Dense index in canonical order, used to address per-suit storage.
    pub fn index(self) -> usize {
        match self {
            Suit::Blue => 0,
            Suit::Green => 1,
            Suit::Red => 2,
            Suit::White => 3,
            Suit::Yellow => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Blue => "Blue",
            Suit::Green => "Green",
            Suit::Red => "Red",
            Suit::White => "White",
            Suit::Yellow => "Yellow",
        }
    }

    /// Accepts the full suit name or its initial letter, case-insensitively.
    pub fn from_name(s: &str) -> Option<Suit> {
        match s.to_ascii_lowercase().as_str() {
            "blue" | "b" => Some(Suit::Blue),
            "green" | "g" => Some(Suit::Green),
            "red" | "r" => Some(Suit::Red),
            "white" | "w" => Some(Suit::White),
            "yellow" | "y" => Some(Suit::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn all_suits() -> [Suit; 5] {
    [Suit::Blue, Suit::Green, Suit::Red, Suit::White, Suit::Yellow]
}

/// Number of copies of `value` in each suit: three 1s, two each of 2-4, one 5.
pub fn copies_of(value: u8) -> usize {
    match value {
        1 => 3,
        2..=4 => 2,
        5 => 1,
        _ => 0,
    }
}

/// Represents a single Hanabi card.
/// Suit and value never change after the deck is built.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The firework color of the card
    pub suit: Suit,
    /// Face value from 1 through 5
    pub value: u8,
}

impl Card {
    pub fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.value)
    }
}

/// Builds the 50-card multiset in canonical suit/value order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(50);
    for &s in &all_suits() {
        for value in 1..=MAX_VALUE {
            for _ in 0..copies_of(value) {
                v.push(Card::new(s, value));
            }
        }
    }
    v
}

/// What a hint names: a color or a number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HintToken {
    Suit(Suit),
    Value(u8),
}

impl HintToken {
    pub fn matches(&self, card: &Card) -> bool {
        match *self {
            HintToken::Suit(s) => card.suit == s,
            HintToken::Value(v) => card.value == v,
        }
    }

    /// The annotation a card receives from this hint.
    pub fn mark_for(&self, card: &Card) -> HintMark {
        match (*self, self.matches(card)) {
            (HintToken::Suit(s), true) => HintMark::Suit(s),
            (HintToken::Suit(s), false) => HintMark::NotSuit(s),
            (HintToken::Value(v), true) => HintMark::Value(v),
            (HintToken::Value(v), false) => HintMark::NotValue(v),
        }
    }
}

impl FromStr for HintToken {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(suit) = Suit::from_name(s) {
            return Ok(HintToken::Suit(suit));
        }
        match s.parse::<u8>() {
            Ok(v) if (1..=MAX_VALUE).contains(&v) => Ok(HintToken::Value(v)),
            _ => Err(GameError::InvalidHintToken(s.to_string())),
        }
    }
}

impl fmt::Display for HintToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintToken::Suit(s) => write!(f, "{}", s),
            HintToken::Value(v) => write!(f, "{}", v),
        }
    }
}

/// A single hint annotation recorded on a held card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HintMark {
    /// The card is of this suit
    Suit(Suit),
    /// The card has this value
    Value(u8),
    /// The card is not of this suit
    NotSuit(Suit),
    /// The card does not have this value
    NotValue(u8),
}

impl HintMark {
    pub fn is_positive(&self) -> bool {
        matches!(self, HintMark::Suit(_) | HintMark::Value(_))
    }
}

impl fmt::Display for HintMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintMark::Suit(s) => write!(f, "{}", s),
            HintMark::Value(v) => write!(f, "{}", v),
            HintMark::NotSuit(s) => write!(f, "Not {}", s),
            HintMark::NotValue(v) => write!(f, "Not {}", v),
        }
    }
}

/// A card sitting in a player's hand together with every hint it has received.
/// The hint history is append-only; contradictory marks are kept as given.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandCard {
    /// The underlying card
    pub card: Card,
    /// Hint annotations in the order they were given
    pub hints: Vec<HintMark>,
}

impl HandCard {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            hints: Vec::new(),
        }
    }

    pub fn annotate(&mut self, token: &HintToken) -> HintMark {
        let mark = token.mark_for(&self.card);
        self.hints.push(mark);
        mark
    }
}
