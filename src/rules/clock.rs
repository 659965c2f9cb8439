//! Countdown and match conclusion.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::{ActionError, GameState, Phase};
use crate::scoring::{final_standings, sole_leader};

/// Why a match concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    TimeExpired,
    BoardFull,
    DeckExhausted,
    /// The host stopped the match.
    Abandoned,
}

impl EndReason {
    fn announcement(self) -> &'static str {
        match self {
            EndReason::TimeExpired => "Time is up!",
            EndReason::BoardFull => "The board is full!",
            EndReason::DeckExhausted => "The deck is exhausted!",
            EndReason::Abandoned => "The match was stopped.",
        }
    }
}

/// Advance the countdown by `elapsed_secs`.
///
/// The countdown saturates at zero; reaching it concludes the match with
/// `EndReason::TimeExpired`. A concluded match is returned unchanged.
#[must_use]
pub fn tick(state: &GameState, elapsed_secs: u32) -> GameState {
    let mut next = state.clone();
    if next.is_game_over || elapsed_secs == 0 {
        return next;
    }

    next.time_left = next.time_left.saturating_sub(elapsed_secs);
    if next.time_left == 0 {
        finish(&mut next, EndReason::TimeExpired);
    }
    next
}

/// Conclude the match now.
///
/// # Errors
///
/// `ActionError::GameOver` if the match has already concluded.
#[instrument(skip(state), err(level = "debug"))]
pub fn conclude(state: &GameState, reason: EndReason) -> Result<GameState, ActionError> {
    if state.is_game_over {
        return Err(ActionError::GameOver);
    }
    let mut next = state.clone();
    finish(&mut next, reason);
    Ok(next)
}

/// Settle scores, pick the winner and close the match.
///
/// Each seat's `score` becomes its final score, hand penalty included.
/// A shared top score leaves `winner` empty.
pub(crate) fn finish(state: &mut GameState, reason: EndReason) {
    let standings = final_standings(state);
    for standing in &standings {
        state.players[standing.player].score = standing.final_score;
    }

    state.winner = sole_leader(&standings);
    state.phase = Phase::End;
    state.is_game_over = true;
    state.last_drawn = None;

    state.log(reason.announcement());
    match state.winner {
        Some(seat) => {
            let entry = format!("The match is over. Winner: {}", state.players[seat].name);
            state.log(entry);
        }
        None => state.log("The match is over. It is a tie."),
    }

    info!(?reason, winner = ?state.winner, turns = state.turn_count, "match concluded");
}
