//! Legal target queries.
//!
//! These are recomputed from the state on every call; nothing is cached,
//! so the forced-capture rule always reflects the current board.

use crate::board::Coord;
use crate::core::{GameState, Phase, PlayerId};

/// Legal target cells for `player` in the current phase.
///
/// - `setup`: any empty cell while the board is bare, afterwards only empty
///   cells touching a card (diagonals count).
/// - `setup_token`: cells free of both cards and tokens.
/// - `move`: knight jumps not blocked by another token. If any of them
///   bears a card, only the card-bearing ones are legal.
/// - placement phases: cells free of both cards and tokens.
/// - `draw` and `end`: none.
#[must_use]
pub fn valid_moves(state: &GameState, player: PlayerId) -> Vec<Coord> {
    match state.phase {
        Phase::Setup => setup_cells(state),
        Phase::SetupToken => free_cells(state),
        Phase::Move => knight_moves(state, player),
        Phase::PlaceAfterMove | Phase::PlaceAfterDraw | Phase::Place => free_cells(state),
        Phase::Draw | Phase::End => Vec::new(),
    }
}

/// Cells where a setup card may go.
#[must_use]
pub fn setup_cells(state: &GameState) -> Vec<Coord> {
    let board = &state.board;
    let seeded = board.has_any_card();

    Coord::all()
        .filter(|&at| !board.has_card(at))
        .filter(|&at| !seeded || board.touches_card(at))
        .collect()
}

/// Cells with neither a card nor a token.
#[must_use]
pub fn free_cells(state: &GameState) -> Vec<Coord> {
    Coord::all()
        .filter(|&at| !state.board.has_card(at) && !state.has_token(at))
        .collect()
}

/// Knight moves for `player`, with the forced-capture rule applied.
///
/// Empty if the player has no token on the board.
#[must_use]
pub fn knight_moves(state: &GameState, player: PlayerId) -> Vec<Coord> {
    let Some(from) = state.players[player].position else {
        return Vec::new();
    };

    let open: Vec<Coord> = from
        .knight_targets()
        .into_iter()
        .filter(|&to| !state.has_token(to))
        .collect();

    let captures: Vec<Coord> = open
        .iter()
        .copied()
        .filter(|&to| state.board.has_card(to))
        .collect();

    if captures.is_empty() {
        open
    } else {
        captures
    }
}
