//! Card records.
//!
//! A card is a single fact: a person, a location, an event or a date.
//! Cards that truly belong together share a `chain` grouping id; players
//! score by declaring such groups from their hand.

use serde::{Deserialize, Serialize};

/// Unique card identifier, stable for the whole match.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a card depicts. Chain composition rules are written in these terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Person,
    Location,
    Event,
    Date,
}

impl CardKind {
    /// All kinds, in the order a full chain lists them.
    pub const ALL: [CardKind; 4] = [
        CardKind::Person,
        CardKind::Location,
        CardKind::Event,
        CardKind::Date,
    ];
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CardKind::Person => "PERSON",
            CardKind::Location => "LOCATION",
            CardKind::Event => "EVENT",
            CardKind::Date => "DATE",
        };
        f.write_str(label)
    }
}

/// A card.
///
/// `is_hidden` only means something while the card lies on the board;
/// cards picked up into a hand are always face-up.
///
/// ## Example
///
/// ```
/// use kompromat::cards::{Card, CardKind};
///
/// let card = Card::new("mohacs-2", CardKind::Location, "Mohács", "mohacs")
///     .with_description("Southern Hungary")
///     .with_year(1526);
///
/// assert_eq!(card.year, Some(1526));
/// assert!(!card.is_hidden);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Grouping id shared by the cards of one true chain.
    pub chain: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub is_hidden: bool,
}

impl Card {
    /// Create a face-up card with no description or year.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: CardKind,
        title: impl Into<String>,
        chain: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(id),
            kind,
            title: title.into(),
            description: String::new(),
            chain: chain.into(),
            year: None,
            is_hidden: false,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the year (builder pattern).
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Copy of this card with the given visibility.
    #[must_use]
    pub fn facing(&self, hidden: bool) -> Self {
        Self {
            is_hidden: hidden,
            ..self.clone()
        }
    }
}
