//! The 10×10 card grid.
//!
//! Cells are stored row-major in a persistent vector, so cloning the board
//! for a new state is O(1) and a placement copies only the touched chunk.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use crate::cards::Card;
use crate::core::config::BOARD_SIZE;

/// Card grid. Each cell holds at most one card.
///
/// ## Usage
///
/// ```
/// use kompromat::board::{Board, Coord};
/// use kompromat::cards::{Card, CardKind};
///
/// let mut board = Board::new();
/// assert!(!board.has_any_card());
///
/// board.place(Coord::new(4, 4), Card::new("a", CardKind::Event, "E", "g"));
/// assert!(board.has_card(Coord::new(4, 4)));
/// assert!(board.touches_card(Coord::new(5, 5)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<Option<Card>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: std::iter::repeat(None).take(BOARD_SIZE * BOARD_SIZE).collect(),
        }
    }

    /// Does the board hold exactly one slot per cell?
    pub(crate) fn is_well_formed(&self) -> bool {
        self.cells.len() == BOARD_SIZE * BOARD_SIZE
    }

    /// Card at a cell, if any. Off-board cells are empty.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&Card> {
        if !at.in_bounds() {
            return None;
        }
        self.cells.get(at.index()).and_then(Option::as_ref)
    }

    /// Does the cell hold a card?
    #[must_use]
    pub fn has_card(&self, at: Coord) -> bool {
        self.get(at).is_some()
    }

    /// Put a card on a cell.
    ///
    /// Returns the card that was there before. Callers check emptiness
    /// first; the rules never overwrite.
    pub fn place(&mut self, at: Coord, card: Card) -> Option<Card> {
        debug_assert!(at.in_bounds());
        self.cells.set(at.index(), Some(card))
    }

    /// Lift the card off a cell, leaving it empty.
    pub fn take(&mut self, at: Coord) -> Option<Card> {
        if !at.in_bounds() {
            return None;
        }
        self.cells.set(at.index(), None)
    }

    /// Is there at least one card anywhere?
    #[must_use]
    pub fn has_any_card(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }

    /// Is every cell covered?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Is any of the eight surrounding cells covered?
    #[must_use]
    pub fn touches_card(&self, at: Coord) -> bool {
        at.neighbours().into_iter().any(|n| self.has_card(n))
    }

    /// Cards on the board with their cells, row-major.
    pub fn cards(&self) -> impl Iterator<Item = (Coord, &Card)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.as_ref().map(|card| (Coord::from_index(i), card)))
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = Option<&Card>> {
        self.cells
            .iter()
            .skip(y * BOARD_SIZE)
            .take(BOARD_SIZE)
            .map(Option::as_ref)
    }
}
