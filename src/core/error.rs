//! Error types for rejected actions and invalid setup.
//!
//! Rejections are values, not faults: every variant here is recoverable by
//! the caller retrying with a legal action or different input.

use super::state::Phase;
use crate::board::Coord;
use crate::cards::CardId;
use crate::scoring::ChainReason;

/// Why a transition refused to produce a new state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The match has already concluded.
    #[display("The match is over")]
    GameOver,

    /// The action is not accepted in the current phase.
    #[display("Action not allowed during {_0}")]
    WrongPhase(Phase),

    /// The coordinate lies outside the board.
    #[display("{_0} is off the board")]
    OutOfBounds(Coord),

    /// The acting player does not hold the card.
    #[display("{_0} is not in hand")]
    CardNotInHand(CardId),

    /// A card already lies on the target cell.
    #[display("{_0} already holds a card")]
    CellHasCard(Coord),

    /// A token already stands on the target cell.
    #[display("{_0} is occupied by a token")]
    CellHasToken(Coord),

    /// The target is not in the legal set for this phase.
    #[display("{_0} is not a legal target")]
    IllegalTarget(Coord),

    /// The move does not start from the acting player's token.
    #[display("Move must start from the player's token, not {_0}")]
    WrongOrigin(Coord),

    /// A player over the hand limit cannot pass.
    #[display("Cannot pass holding {_0} cards")]
    HandOverLimit(usize),

    /// The same card was named twice in a declaration.
    #[display("{_0} was declared twice")]
    DuplicateCard(CardId),

    /// The declared chain failed composition checks.
    #[display("Invalid chain: {_0}")]
    InvalidChain(ChainReason),
}

impl std::error::Error for ActionError {}

/// Why a match could not be created.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Seat count outside 1..=MAX_PLAYERS.
    #[display("Player count must be between 1 and 8, got {_0}")]
    PlayerCount(usize),
}

impl std::error::Error for SetupError {}

/// Why a caller-supplied card source was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DeckError {
    /// Fewer cards than a match needs.
    #[display("Card source has {_0} cards, at least 10 required")]
    TooFewCards(usize),

    /// Two cards share an id.
    #[display("Card id {_0} appears more than once")]
    DuplicateId(CardId),
}

impl std::error::Error for DeckError {}

/// Failure encoding or decoding a state snapshot.
#[derive(Debug, derive_more::Display)]
pub enum SnapshotError {
    #[display("Snapshot encoding failed: {_0}")]
    Encode(bincode::Error),

    #[display("Snapshot decoding failed: {_0}")]
    Decode(bincode::Error),

    /// The bytes decoded but describe a state no transition could reach.
    #[display("Snapshot is not a valid match state: {_0}")]
    Invalid(String),
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Encode(e) | SnapshotError::Decode(e) => Some(e.as_ref()),
            SnapshotError::Invalid(_) => None,
        }
    }
}
