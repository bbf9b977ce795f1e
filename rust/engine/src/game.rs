use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, PlayOutcome};
use crate::cards::Card;
use crate::controller::Controller;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::GameRecord;
use crate::player::{Player, PlayerAction, HAND_SIZE};
use crate::rules::validate_action;
use crate::view::{CardView, HandView, Snapshot};

/// Seats at the table.
pub const PLAYERS: usize = 3;

/// How a finished game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Every firework reached 5
    Win,
    /// The last chance was lost on a misplay
    Loss,
    /// The deck ran out and everyone took their final turn
    DeckExhausted { score: u8 },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// What an applied action did to the table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnResult {
    Played { card: Card },
    Misplayed { card: Card },
    Discarded { card: Card },
    Hinted { matched: usize },
}

/// Records a single applied action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnEvent {
    /// 1-based turn number
    pub turn: u32,
    /// Seat of the acting player
    pub player: usize,
    /// The action as it was requested
    pub action: PlayerAction,
    /// Effect on the table
    pub result: TurnResult,
    /// Whether a replacement card was drawn
    #[serde(default)]
    pub drew: bool,
}

/// A three-player Hanabi table: deck, board, seats, and the turn cursor.
///
/// # Examples
///
/// ```
/// use hanabi_engine::game::{Game, GameStatus};
/// use hanabi_engine::player::PlayerAction;
///
/// let mut game = Game::new(["Ann", "Bob", "Cid"], Some(42));
/// assert_eq!(game.deck_remaining(), 35);
///
/// let event = game.apply_action(PlayerAction::Discard(0)).expect("legal discard");
/// assert_eq!(event.player, 0);
/// assert_eq!(game.current_player(), 1);
/// assert_eq!(game.deck_remaining(), 34);
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Debug)]
pub struct Game {
    /// Seed the deck was shuffled with, when it was shuffled at all
    seed: Option<u64>,
    deck: Deck,
    board: Board,
    players: [Player; PLAYERS],
    /// Seat whose turn it is
    current: usize,
    /// 1-based number of the turn being played
    turn: u32,
    /// Turns left after the deck emptied
    final_turns: Option<usize>,
    status: GameStatus,
    history: Vec<TurnEvent>,
}

impl Game {
    /// Builds, shuffles and deals a fresh game. Without a seed one is drawn
    /// from the thread RNG and kept for the game record.
    pub fn new<S: Into<String>>(names: [S; PLAYERS], seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let mut game = Self::with_deck(names, deck);
        game.seed = Some(seed);
        game
    }

    /// Deals from `deck` as given, without shuffling.
    pub fn with_deck<S: Into<String>>(names: [S; PLAYERS], mut deck: Deck) -> Self {
        let mut seat = 0;
        let mut players = names.map(|n| {
            let p = Player::new(n, seat);
            seat += 1;
            p
        });
        for p in players.iter_mut() {
            for _ in 0..HAND_SIZE {
                p.draw(&mut deck);
            }
        }
        let final_turns = deck.is_empty().then_some(PLAYERS);
        Self {
            seed: None,
            deck,
            board: Board::new(),
            players,
            current: 0,
            turn: 1,
            final_turns,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn players(&self) -> &[Player; PLAYERS] {
        &self.players
    }
    pub fn current_player(&self) -> usize {
        self.current
    }
    pub fn turn(&self) -> u32 {
        self.turn
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.count()
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn history(&self) -> &[TurnEvent] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished(o) => Some(o),
        }
    }

    /// Applies one action for the current player.
    ///
    /// The action is fully validated first; on error nothing has changed and
    /// the same player is still to act.
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<TurnEvent, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let hand_sizes = self.players.each_ref().map(Player::hand_len);
        let validated = validate_action(self.current, &hand_sizes, self.board.hints(), action)?;

        let actor = self.current;
        let before = self.deck.count();
        let result = match validated.action() {
            PlayerAction::Play(index) => {
                let (card, outcome) =
                    self.players[actor].play_card(&mut self.board, &mut self.deck, index)?;
                match outcome {
                    PlayOutcome::Played => TurnResult::Played { card },
                    PlayOutcome::Misplayed => TurnResult::Misplayed { card },
                }
            }
            PlayerAction::Discard(index) => {
                let card =
                    self.players[actor].discard_card(&mut self.board, &mut self.deck, index)?;
                TurnResult::Discarded { card }
            }
            PlayerAction::Hint { target, token } => {
                let (giver, receiver) = pair_mut(&mut self.players, actor, target);
                let matched = giver.give_hint(&mut self.board, receiver, token)?;
                TurnResult::Hinted { matched }
            }
        };

        let event = TurnEvent {
            turn: self.turn,
            player: actor,
            action,
            result,
            drew: self.deck.count() < before,
        };
        debug!(
            turn = event.turn,
            player = actor,
            action = ?event.action,
            result = ?event.result,
            chances = self.board.chances(),
            hints = self.board.hints(),
            "turn applied"
        );
        self.history.push(event.clone());
        self.finish_turn();
        Ok(event)
    }

    fn finish_turn(&mut self) {
        self.final_turns = match self.final_turns {
            Some(n) => Some(n.saturating_sub(1)),
            None if self.deck.is_empty() => Some(PLAYERS),
            None => None,
        };

        let outcome = if self.board.chances() == 0 {
            Some(Outcome::Loss)
        } else if self.board.check_complete() {
            Some(Outcome::Win)
        } else if self.final_turns == Some(0) {
            Some(Outcome::DeckExhausted {
                score: self.board.score(),
            })
        } else {
            None
        };

        match outcome {
            Some(o) => {
                info!(outcome = ?o, score = self.board.score(), turns = self.turn, "game finished");
                self.status = GameStatus::Finished(o);
            }
            None => {
                self.current = (self.current + 1) % PLAYERS;
                self.turn += 1;
            }
        }
    }

    /// Runs the turn loop until the game ends or the controller gives up.
    ///
    /// Returns the outcome, or `None` when the controller abandoned the game.
    pub fn run<C: Controller>(&mut self, controller: &mut C) -> Result<Option<Outcome>, C::Error> {
        while self.status == GameStatus::InProgress {
            let view = self.snapshot();
            let Some(action) = controller.choose_action(&view)? else {
                debug!(turn = self.turn, "game abandoned");
                return Ok(None);
            };
            match self.apply_action(action) {
                Ok(event) => controller.applied(&event)?,
                Err(e) => controller.rejected(&e)?,
            }
        }
        Ok(self.outcome())
    }

    /// The table as the current player sees it.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_for(Some(self.current))
    }

    /// The table as `viewer` sees it; `None` shows every hand face up.
    pub fn snapshot_for(&self, viewer: Option<usize>) -> Snapshot {
        let hands = self
            .players
            .iter()
            .map(|p| HandView {
                seat: p.position(),
                name: p.name().to_string(),
                cards: p
                    .hand()
                    .iter()
                    .map(|hc| {
                        if viewer == Some(p.position()) {
                            CardView::Concealed {
                                hints: hc.hints.clone(),
                            }
                        } else {
                            CardView::Visible {
                                card: hc.card,
                                hints: hc.hints.clone(),
                            }
                        }
                    })
                    .collect(),
            })
            .collect();
        Snapshot {
            turn: self.turn,
            current: self.current,
            viewer,
            chances: self.board.chances(),
            hints: self.board.hints(),
            deck_remaining: self.deck.count(),
            fireworks: self.board.heights(),
            discards: self.board.discards().to_vec(),
            hands,
            final_turns: self.final_turns,
        }
    }

    /// Serializable summary of the game so far.
    pub fn record(&self, game_id: String) -> GameRecord {
        GameRecord {
            game_id,
            seed: self.seed,
            players: self.players.iter().map(|p| p.name().to_string()).collect(),
            turns: self.history.clone(),
            outcome: self.outcome(),
            score: self.board.score(),
            ts: None,
        }
    }
}

/// Borrows two distinct seats at once, the first shared and the second mutable.
fn pair_mut(players: &mut [Player], a: usize, b: usize) -> (&Player, &mut Player) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = players.split_at_mut(b);
        (&left[a], &mut right[0])
    } else {
        let (left, right) = players.split_at_mut(a);
        (&right[0], &mut left[b])
    }
}
