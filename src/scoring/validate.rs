//! Chain validation and end-of-match scoring.
//!
//! A declaration is checked in three steps:
//! 1. Size: 3 or 4 cards.
//! 2. Composition: a person, a location and an event; a 4-card chain also
//!    needs a date.
//! 3. Correctness: all cards share one grouping id.
//!
//! Steps 1 and 2 can invalidate a declaration. Step 3 never does: a wrong
//! chain is still a legal declaration, it just scores negative.

use serde::{Deserialize, Serialize};

use super::chain::Chain;
use crate::cards::{Card, CardKind};

/// Reward for a correct 3-card chain.
pub const SHORT_CHAIN_POINTS: i32 = 2;

/// Reward for a correct 4-card chain.
pub const FULL_CHAIN_POINTS: i32 = 4;

/// Why a declaration was refused or penalised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ChainReason {
    /// Not 3 or 4 cards.
    #[display("A chain holds 3 or 4 cards, not {_0}")]
    WrongSize(usize),

    /// Person, location or event missing.
    #[display("A chain needs a person, a location and an event")]
    MissingCoreKind,

    /// Four cards without a date.
    #[display("A 4-card chain needs a date")]
    MissingDate,

    /// Composition is fine but the cards do not belong together.
    #[display("The cards do not belong to the same chain")]
    Mismatched,
}

/// Outcome of [`validate_chain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainValidation {
    /// The declaration may be committed.
    pub is_valid: bool,
    /// Signed points the declaration is worth.
    pub points: i32,
    /// Set for invalid declarations and for mismatched ones.
    pub reason: Option<ChainReason>,
}

impl ChainValidation {
    fn rejected(reason: ChainReason) -> Self {
        Self {
            is_valid: false,
            points: 0,
            reason: Some(reason),
        }
    }
}

/// Validate a proposed chain and compute its points.
///
/// ```
/// use kompromat::cards::{Card, CardKind};
/// use kompromat::scoring::validate_chain;
///
/// let cards = [
///     Card::new("1", CardKind::Person, "Louis II", "mohacs"),
///     Card::new("2", CardKind::Location, "Mohács", "mohacs"),
///     Card::new("3", CardKind::Event, "Battle of Mohács", "mohacs"),
/// ];
/// let result = validate_chain(&cards);
/// assert!(result.is_valid);
/// assert_eq!(result.points, 2);
/// ```
#[must_use]
pub fn validate_chain(cards: &[Card]) -> ChainValidation {
    let reward = match cards.len() {
        3 => SHORT_CHAIN_POINTS,
        4 => FULL_CHAIN_POINTS,
        n => return ChainValidation::rejected(ChainReason::WrongSize(n)),
    };

    let has = |kind: CardKind| cards.iter().any(|c| c.kind == kind);

    if !(has(CardKind::Person) && has(CardKind::Location) && has(CardKind::Event)) {
        return ChainValidation::rejected(ChainReason::MissingCoreKind);
    }

    if cards.len() == 4 && !has(CardKind::Date) {
        return ChainValidation::rejected(ChainReason::MissingDate);
    }

    let grouping = &cards[0].chain;
    if cards.iter().all(|c| &c.chain == grouping) {
        ChainValidation {
            is_valid: true,
            points: reward,
            reason: None,
        }
    } else {
        ChainValidation {
            is_valid: true,
            points: -reward,
            reason: Some(ChainReason::Mismatched),
        }
    }
}

/// End-of-match score: committed chain points minus one per card left in hand.
///
/// ```
/// use kompromat::cards::Card;
/// use kompromat::scoring::{calculate_final_score, Chain, ChainId};
///
/// let chains = vec![
///     Chain::committed(ChainId(0), vec![], 4),
///     Chain::committed(ChainId(1), vec![], -2),
/// ];
/// let hand: Vec<Card> = Vec::new();
/// assert_eq!(calculate_final_score(&chains, &hand), 2);
/// ```
#[must_use]
pub fn calculate_final_score<'a>(
    chains: impl IntoIterator<Item = &'a Chain>,
    hand: impl IntoIterator<Item = &'a Card>,
) -> i32 {
    let committed: i32 = chains.into_iter().map(|c| c.points).sum();
    let leftover = hand.into_iter().count() as i32;
    committed - leftover
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ChainId;

    fn card(id: &str, kind: CardKind, chain: &str) -> Card {
        Card::new(id, kind, id, chain)
    }

    fn ple(chain: &str) -> Vec<Card> {
        vec![
            card("p", CardKind::Person, chain),
            card("l", CardKind::Location, chain),
            card("e", CardKind::Event, chain),
        ]
    }

    #[test]
    fn test_correct_short_chain() {
        let result = validate_chain(&ple("A"));
        assert_eq!(result, ChainValidation { is_valid: true, points: 2, reason: None });
    }

    #[test]
    fn test_mismatched_short_chain_is_valid_but_negative() {
        let mut cards = ple("A");
        cards[2].chain = "B".to_string();

        let result = validate_chain(&cards);
        assert!(result.is_valid);
        assert_eq!(result.points, -2);
        assert_eq!(result.reason, Some(ChainReason::Mismatched));
    }

    #[test]
    fn test_correct_full_chain() {
        let mut cards = ple("A");
        cards.push(card("d", CardKind::Date, "A"));

        let result = validate_chain(&cards);
        assert!(result.is_valid);
        assert_eq!(result.points, 4);
    }

    #[test]
    fn test_mismatched_full_chain() {
        let mut cards = ple("A");
        cards.push(card("d", CardKind::Date, "Z"));

        let result = validate_chain(&cards);
        assert!(result.is_valid);
        assert_eq!(result.points, -4);
    }

    #[test]
    fn test_full_chain_without_date() {
        let mut cards = ple("A");
        cards.push(card("p2", CardKind::Person, "A"));

        let result = validate_chain(&cards);
        assert!(!result.is_valid);
        assert_eq!(result.points, 0);
        assert_eq!(result.reason, Some(ChainReason::MissingDate));
    }

    #[test]
    fn test_missing_core_kind() {
        let cards = vec![
            card("p", CardKind::Person, "A"),
            card("l", CardKind::Location, "A"),
            card("d", CardKind::Date, "A"),
        ];

        let result = validate_chain(&cards);
        assert!(!result.is_valid);
        assert_eq!(result.points, 0);
        assert_eq!(result.reason, Some(ChainReason::MissingCoreKind));
    }

    #[test]
    fn test_wrong_sizes() {
        let three = ple("A");
        let two = &three[..2];
        assert_eq!(validate_chain(two).reason, Some(ChainReason::WrongSize(2)));
        assert_eq!(validate_chain(two).points, 0);
        assert!(!validate_chain(two).is_valid);

        let mut five = ple("A");
        five.push(card("d", CardKind::Date, "A"));
        five.push(card("x", CardKind::Event, "A"));
        assert_eq!(validate_chain(&five).reason, Some(ChainReason::WrongSize(5)));

        assert_eq!(validate_chain(&[]).reason, Some(ChainReason::WrongSize(0)));
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut cards = ple("A");
        cards.reverse();
        assert_eq!(validate_chain(&cards).points, 2);
    }

    #[test]
    fn test_final_score() {
        let chains = vec![
            Chain::committed(ChainId(0), ple("A"), 4),
            Chain::committed(ChainId(1), ple("B"), -2),
        ];
        let hand = ple("C");

        assert_eq!(calculate_final_score(&chains, &hand), -1);
    }

    #[test]
    fn test_final_score_empty() {
        let chains: Vec<Chain> = Vec::new();
        let hand: Vec<Card> = Vec::new();
        assert_eq!(calculate_final_score(&chains, &hand), 0);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(
            ChainReason::WrongSize(2).to_string(),
            "A chain holds 3 or 4 cards, not 2"
        );
    }
}
