//! Board coordinates and the offset patterns used by the rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::BOARD_SIZE;

/// The eight knight jumps, `(dx, dy)`.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// The eight surrounding cells, diagonals included.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell on the board. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    /// Create a coordinate. Bounds are not checked.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Is this coordinate on the board?
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Row-major cell index. Only meaningful in bounds.
    #[must_use]
    pub const fn index(self) -> usize {
        self.y * BOARD_SIZE + self.x
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index % BOARD_SIZE, index / BOARD_SIZE)
    }

    /// Shift by `(dx, dy)`, `None` if the result leaves the board.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Self::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// In-bounds knight jumps from this cell.
    #[must_use]
    pub fn knight_targets(self) -> SmallVec<[Coord; 8]> {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }

    /// In-bounds surrounding cells.
    #[must_use]
    pub fn neighbours(self) -> SmallVec<[Coord; 8]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }

    /// Is `other` one knight jump away?
    #[must_use]
    pub fn is_knight_jump(self, other: Coord) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Self::from_index)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
