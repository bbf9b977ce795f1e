//! Card, table, and turn formatters for terminal display.
//!
//! Pure functions that turn engine snapshots and events into text. Cards use
//! a compact suit letter plus value (`B3`, `Y5`); hint marks print as given
//! (`Blue`, `Not 3`).
//!
//! ## Example
//!
//! ```rust
//! use hanabi_engine::cards::{Card, Suit};
//! use hanabi_cli::formatters::{format_card, format_cards};
//!
//! let card = Card::new(Suit::Yellow, 4);
//! assert_eq!(format_card(&card), "Y4");
//! assert_eq!(format_cards(&[card, Card::new(Suit::Red, 1)]), "Y4 R1");
//! assert_eq!(format_cards(&[]), "(none)");
//! ```

use hanabi_engine::cards::{Card, HintMark, Suit, all_suits};
use hanabi_engine::game::{Outcome, TurnEvent, TurnResult};
use hanabi_engine::player::PlayerAction;
use hanabi_engine::view::{CardView, HandView, Snapshot};

pub fn format_suit(suit: &Suit) -> &'static str {
    match suit {
        Suit::Blue => "B",
        Suit::Green => "G",
        Suit::Red => "R",
        Suit::White => "W",
        Suit::Yellow => "Y",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_suit(&card.suit), card.value)
}

/// Space-separated cards, or `(none)` for an empty pile.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        "(none)".to_string()
    } else {
        let formatted: Vec<String> = cards.iter().map(format_card).collect();
        formatted.join(" ")
    }
}

pub fn format_hints(hints: &[HintMark]) -> String {
    if hints.is_empty() {
        String::new()
    } else {
        let marks: Vec<String> = hints.iter().map(ToString::to_string).collect();
        format!(" ({})", marks.join(", "))
    }
}

/// Firework heights in suit order, e.g. `B2 G0 R1 W0 Y0`.
pub fn format_fireworks(heights: &[u8; 5]) -> String {
    let parts: Vec<String> = all_suits()
        .iter()
        .map(|s| format!("{}{}", format_suit(s), heights[s.index()]))
        .collect();
    parts.join(" ")
}

/// Shared board lines: fireworks, counters, discard pile.
pub fn format_board(view: &Snapshot) -> Vec<String> {
    let mut lines = vec![
        format!("Fireworks: {}", format_fireworks(&view.fireworks)),
        format!(
            "Chances: {}  Hints: {}  Deck: {}",
            view.chances, view.hints, view.deck_remaining
        ),
        format!("Discards: {}", format_cards(&view.discards)),
    ];
    if let Some(n) = view.final_turns {
        lines.push(format!("Deck is empty: {} final turn(s) left", n));
    }
    lines
}

/// One hand on a single line. Concealed cards show `??` and their hints only.
pub fn format_hand(hand: &HandView) -> String {
    let concealed = hand
        .cards
        .iter()
        .any(|cv| matches!(cv, CardView::Concealed { .. }));
    let mut line = format!(
        "P{} {}{}:",
        hand.seat + 1,
        hand.name,
        if concealed { " (you)" } else { "" }
    );
    if hand.cards.is_empty() {
        line.push_str(" (no cards)");
    }
    for (i, cv) in hand.cards.iter().enumerate() {
        let face = match cv.card() {
            Some(card) => format_card(&card),
            None => "??".to_string(),
        };
        line.push_str(&format!(" [{}] {}{}", i + 1, face, format_hints(cv.hints())));
    }
    line
}

/// Full table render for the player about to act.
pub fn format_table(view: &Snapshot) -> Vec<String> {
    let actor = &view.hands[view.current].name;
    let mut lines = vec![format!("=== Turn {}: {} to act ===", view.turn, actor)];
    lines.extend(format_board(view));
    lines.extend(view.hands.iter().map(format_hand));
    lines
}

pub fn format_action(action: &PlayerAction, names: &[String]) -> String {
    match action {
        PlayerAction::Play(i) => format!("play #{}", i + 1),
        PlayerAction::Discard(i) => format!("discard #{}", i + 1),
        PlayerAction::Hint { target, token } => {
            let who = names.get(*target).map_or("?", String::as_str);
            format!("hint {}: {}", who, token)
        }
    }
}

pub fn format_event(event: &TurnEvent, names: &[String]) -> String {
    let who = names.get(event.player).map_or("?", String::as_str);
    match &event.result {
        TurnResult::Played { card } => format!("{} played {}", who, card),
        TurnResult::Misplayed { card } => {
            format!("{} misplayed {} and lost a chance", who, card)
        }
        TurnResult::Discarded { card } => format!("{} discarded {}", who, card),
        TurnResult::Hinted { matched } => {
            let hint = match &event.action {
                PlayerAction::Hint { target, token } => format!(
                    "{}: {}",
                    names.get(*target).map_or("?", String::as_str),
                    token
                ),
                other => format_action(other, names),
            };
            format!(
                "{} hinted {} ({} matching card{})",
                who,
                hint,
                matched,
                if *matched == 1 { "" } else { "s" }
            )
        }
    }
}

/// Banner headline for a finished game.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Win => "YOU WIN! Every firework is complete (25/25)".to_string(),
        Outcome::Loss => "YOU LOSE! The last chance is gone".to_string(),
        Outcome::DeckExhausted { score } => {
            format!("GAME OVER: the deck ran out, final score {}/25", score)
        }
    }
}
