//! Scoring: chain validation, committed chains, final standings.
//!
//! The validator is pure and does not look at match state; committing a
//! validated chain is the `declare_chain` transition in [`crate::rules`].

pub mod chain;
pub mod validate;
pub mod tally;

pub use chain::{Chain, ChainId};
pub use validate::{
    calculate_final_score, validate_chain, ChainReason, ChainValidation, FULL_CHAIN_POINTS,
    SHORT_CHAIN_POINTS,
};
pub use tally::{final_standings, sole_leader, Standing};
