//! Committed chain records.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Identifier of a committed chain, unique within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u32);

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chain({})", self.0)
    }
}

/// A chain a player declared and committed.
///
/// Distinct from a card's `chain` grouping id: a player may commit cards
/// that do not share one, and is then penalised through `points`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: ChainId,
    /// The 3 or 4 committed cards.
    pub cards: Vec<Card>,
    pub is_valid: bool,
    /// Reserved; nothing rejects a committed chain.
    pub is_rejected: bool,
    /// Signed reward: positive when correct, negative when not.
    pub points: i32,
}

impl Chain {
    /// Record a committed chain.
    #[must_use]
    pub fn committed(id: ChainId, cards: Vec<Card>, points: i32) -> Self {
        Self {
            id,
            cards,
            is_valid: true,
            is_rejected: false,
            points,
        }
    }

    /// Did the declared cards really belong together?
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.points > 0
    }
}
