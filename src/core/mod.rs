//! Core types: seats, configuration, RNG, actions, state, errors.
//!
//! Everything the rules read or write lives here; the rules themselves are
//! in [`crate::rules`] and [`crate::scoring`].

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;
pub mod snapshot;

pub use player::{Player, PlayerColor, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{DeckExhaustedPolicy, GameMode, MatchSettings};
pub use action::{Action, ChainCards};
pub use state::{GameState, Phase};
pub use error::{ActionError, DeckError, SetupError, SnapshotError};
