//! The board: coordinates, offset patterns, and the card grid.
//!
//! Tokens are not stored here; a token's cell is the owning player's
//! `position`. The grid only tracks cards.

pub mod coord;
pub mod grid;

pub use coord::{Coord, KNIGHT_OFFSETS, NEIGHBOUR_OFFSETS};
pub use grid::Board;
