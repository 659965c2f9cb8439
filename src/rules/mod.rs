//! Match rules: creation, legality, transitions, conclusion.
//!
//! Everything here is a pure function of the state it is given. Drivers
//! either call the transitions directly or go through [`RulesEngine`].

pub mod clock;
pub mod engine;
pub mod moves;
pub mod setup;
pub mod transitions;

pub use clock::{conclude, tick, EndReason};
pub use engine::{GameResult, RulesEngine, StandardRules};
pub use moves::valid_moves;
pub use setup::{create_initial_state, MatchBuilder};
pub use transitions::{declare_chain, draw_card, execute_move, pass_turn, place_card, place_token};
