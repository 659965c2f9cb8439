//! Card sources.
//!
//! A match is dealt from either the built-in set or a caller-supplied list.
//! The engine does not care how a custom list was produced; it only checks
//! that the list is large enough and that ids are unique.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::default_deck::builtin_cards;
use super::definition::Card;
use crate::core::config::MIN_CUSTOM_DECK;
use crate::core::error::DeckError;

/// Where the cards of a match come from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSource {
    /// The built-in historical set.
    #[default]
    BuiltIn,
    /// A caller-supplied list.
    Custom(Vec<Card>),
}

impl CardSource {
    /// Check a custom list.
    ///
    /// # Errors
    ///
    /// `DeckError::TooFewCards` below `MIN_CUSTOM_DECK` cards,
    /// `DeckError::DuplicateId` when two cards share an id.
    pub fn validate(cards: &[Card]) -> Result<(), DeckError> {
        if cards.len() < MIN_CUSTOM_DECK {
            return Err(DeckError::TooFewCards(cards.len()));
        }

        let mut seen = FxHashSet::default();
        for card in cards {
            if !seen.insert(&card.id) {
                return Err(DeckError::DuplicateId(card.id.clone()));
            }
        }
        Ok(())
    }

    /// Resolve to an unshuffled card list.
    ///
    /// A custom list that fails validation is replaced by the built-in set.
    /// Cards always enter play face-up.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        let cards = match self {
            CardSource::BuiltIn => builtin_cards(),
            CardSource::Custom(cards) => match Self::validate(&cards) {
                Ok(()) => cards,
                Err(err) => {
                    warn!(%err, "custom card source rejected, using built-in set");
                    builtin_cards()
                }
            },
        };

        cards.into_iter().map(|c| c.facing(false)).collect()
    }
}
