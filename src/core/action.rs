//! Player actions.
//!
//! One variant per transition. An action carries everything the transition
//! needs except the acting seat, which is always `GameState::current_player`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Coord;
use crate::cards::CardId;

/// Card ids named in a chain declaration. Chains hold 3 or 4 cards.
pub type ChainCards = SmallVec<[CardId; 4]>;

/// A complete player action.
///
/// ## Example
///
/// ```
/// use kompromat::board::Coord;
/// use kompromat::cards::CardId;
/// use kompromat::core::Action;
///
/// let place = Action::PlaceCard { card: CardId::from("eger-2"), at: Coord::new(4, 4) };
/// let declare = Action::declare(["eger-1", "eger-2", "eger-3"]);
///
/// assert_eq!(place.name(), "place_card");
/// assert_eq!(declare.name(), "declare_chain");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put a hand card on the board (setup or any placement phase).
    PlaceCard { card: CardId, at: Coord },
    /// Put the acting seat's token on the board.
    PlaceToken { at: Coord },
    /// Knight move of the acting seat's token.
    Move { from: Coord, to: Coord },
    /// Take the top card of the deck.
    Draw,
    /// Skip the optional placement.
    Pass,
    /// Commit 3 or 4 hand cards as a chain.
    DeclareChain { cards: ChainCards },
}

impl Action {
    /// Build a chain declaration from anything id-like.
    #[must_use]
    pub fn declare<I, C>(cards: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CardId>,
    {
        Action::DeclareChain {
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// Stable short name, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::PlaceCard { .. } => "place_card",
            Action::PlaceToken { .. } => "place_token",
            Action::Move { .. } => "move",
            Action::Draw => "draw",
            Action::Pass => "pass",
            Action::DeclareChain { .. } => "declare_chain",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceCard { card, at } => write!(f, "place {card} at {at}"),
            Action::PlaceToken { at } => write!(f, "token at {at}"),
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
            Action::Draw => f.write_str("draw"),
            Action::Pass => f.write_str("pass"),
            Action::DeclareChain { cards } => {
                let ids: Vec<&str> = cards.iter().map(CardId::as_str).collect();
                write!(f, "declare [{}]", ids.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_collects_ids() {
        let action = Action::declare(["a", "b", "c", "d"]);
        match action {
            Action::DeclareChain { cards } => {
                assert_eq!(cards.len(), 4);
                assert!(!cards.spilled());
                assert_eq!(cards[3], CardId::from("d"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        let mv = Action::Move { from: Coord::new(1, 1), to: Coord::new(2, 3) };
        assert_eq!(mv.to_string(), "move (1, 1) -> (2, 3)");
        assert_eq!(Action::declare(["x", "y", "z"]).to_string(), "declare [x, y, z]");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::PlaceCard { card: CardId::from("k"), at: Coord::new(0, 9) };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
