#![allow(dead_code)]

use hanabi_engine::cards::{full_deck, Card, Suit};
use hanabi_engine::deck::Deck;
use hanabi_engine::game::Game;

pub const NAMES: [&str; 3] = ["Ann", "Bob", "Cid"];

/// A full 50-card deck whose first draws are exactly `first`; the rest of the
/// multiset follows in canonical order.
pub fn stacked_deck(first: &[Card]) -> Deck {
    let mut rest = full_deck();
    for c in first {
        let pos = rest
            .iter()
            .position(|r| r == c)
            .unwrap_or_else(|| panic!("{} requested more often than the deck holds", c));
        rest.remove(pos);
    }
    let mut order = first.to_vec();
    order.extend(rest);
    Deck::stacked(order)
}

/// Deals `hands` (five cards per seat, seat order) from an otherwise full deck.
pub fn game_with_hands(hands: [[Card; 5]; 3]) -> Game {
    let first: Vec<Card> = hands.iter().flatten().copied().collect();
    Game::with_deck(NAMES, stacked_deck(&first))
}

pub fn c(suit: Suit, value: u8) -> Card {
    Card::new(suit, value)
}
