//! Card records and card sources.
//!
//! - `Card`: one fact (person, location, event, date) with a chain grouping id
//! - `CardSource`: built-in set or a caller-supplied list, resolved at match creation

pub mod definition;
pub mod deck;
pub mod default_deck;

pub use definition::{Card, CardId, CardKind};
pub use deck::CardSource;
pub use default_deck::builtin_cards;
