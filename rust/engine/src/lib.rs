//! # hanabi-engine: Hanabi Rule Engine
//!
//! A deterministic rule engine for three-player Hanabi. Owns the deck, the
//! fireworks board, the players' hands and the turn order; text input and
//! rendering live in the CLI crate.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suits, cards, hint tokens and hint marks
//! - [`deck`] - Seeded 50-card draw pile
//! - [`board`] - Firework stacks, discard pile, chance and hint counters
//! - [`player`] - Hands and the play/discard/hint actions
//! - [`rules`] - Up-front validation of player actions
//! - [`game`] - Turn state machine and win/loss detection
//! - [`controller`] - Seam through which the game asks for actions
//! - [`view`] - Per-seat table snapshots with concealed own hands
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Error types for rejected actions
//!
//! ## Quick Start
//!
//! ```rust
//! use hanabi_engine::cards::{HintToken, Suit};
//! use hanabi_engine::game::Game;
//! use hanabi_engine::player::PlayerAction;
//!
//! let mut game = Game::new(["Ann", "Bob", "Cid"], Some(7));
//!
//! // Ann tells Bob where their blue cards are
//! let hint = PlayerAction::Hint { target: 1, token: HintToken::Suit(Suit::Blue) };
//! game.apply_action(hint).expect("hint is legal");
//! assert_eq!(game.board().hints(), 7);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Shuffles are reproducible from a seed:
//!
//! ```rust
//! use hanabi_engine::game::Game;
//!
//! let a = Game::new(["A", "B", "C"], Some(42));
//! let b = Game::new(["A", "B", "C"], Some(42));
//! assert_eq!(a.snapshot_for(None), b.snapshot_for(None));
//! ```

pub mod board;
pub mod cards;
pub mod controller;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod view;
