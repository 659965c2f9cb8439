//! # kompromat
//!
//! Rules engine for a turn-based board game of knight moves and card chains.
//!
//! Players build a 10x10 board from face-down cards, then take turns moving
//! a token by knight jumps, picking up the cards they land on, drawing from
//! the deck and laying cards back down. Cards of four kinds (person,
//! location, event, date) combine into chains that score when they belong
//! together and cost points when they do not.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every action takes `&GameState` and returns a
//!    new state or an `ActionError`. Inputs are never modified.
//!
//! 2. **N-Player First**: 1 to 8 seats; nothing assumes two players.
//!
//! 3. **Deterministic setup**: the deck is shuffled from a seed, so a seed
//!    and a sequence of actions replay a match exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so producing
//!   a new state per action is cheap.
//!
//! - **Legality as queries**: `valid_moves` and `RulesEngine::legal_actions`
//!   are recomputed from the state, never cached.
//!
//! ## Modules
//!
//! - `core`: players, settings, RNG, actions, state, errors, snapshots
//! - `cards`: card records and card sources
//! - `board`: coordinates and the card grid
//! - `rules`: match creation, legal targets, transitions, conclusion
//! - `scoring`: chain validation and final standings
//!
//! ## Example
//!
//! ```
//! use kompromat::{MatchBuilder, RulesEngine, StandardRules};
//!
//! let rules = StandardRules::new();
//! let mut state = MatchBuilder::new().player_count(2).build(7).unwrap();
//!
//! // Build the board and place tokens by always taking the first legal action.
//! while state.phase != kompromat::Phase::Move {
//!     let action = rules.legal_actions(&state).remove(0);
//!     state = rules.apply_action(&state, &action).unwrap();
//! }
//! assert_eq!(state.board.card_count(), 10);
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player, PlayerColor,
    GameRng,
    GameMode, MatchSettings, DeckExhaustedPolicy,
    Action, ChainCards,
    GameState, Phase,
    ActionError, SetupError, DeckError, SnapshotError,
};

pub use crate::cards::{Card, CardId, CardKind, CardSource};

pub use crate::board::{Board, Coord};

pub use crate::rules::{
    MatchBuilder, create_initial_state,
    RulesEngine, StandardRules, GameResult,
    valid_moves, execute_move, draw_card, place_card, place_token, pass_turn, declare_chain,
    tick, conclude, EndReason,
};

pub use crate::scoring::{
    Chain, ChainId, ChainReason, ChainValidation,
    validate_chain, calculate_final_score, final_standings, Standing,
};
