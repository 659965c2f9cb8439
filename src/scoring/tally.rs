//! Final standings.

use serde::{Deserialize, Serialize};

use super::validate::calculate_final_score;
use crate::core::{GameState, PlayerId};

/// One seat's end-of-match result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub final_score: i32,
}

/// Every seat's final score, best first. Ties keep turn order.
#[must_use]
pub fn final_standings(state: &GameState) -> Vec<Standing> {
    let mut standings: Vec<Standing> = state
        .players
        .iter()
        .map(|(id, p)| Standing {
            player: id,
            name: p.name.clone(),
            final_score: calculate_final_score(&p.chains, &p.hand),
        })
        .collect();

    standings.sort_by(|a, b| b.final_score.cmp(&a.final_score));
    standings
}

/// The single best seat, or `None` when the top score is shared.
#[must_use]
pub fn sole_leader(standings: &[Standing]) -> Option<PlayerId> {
    match standings {
        [first, second, ..] if first.final_score == second.final_score => None,
        [first, ..] => Some(first.player),
        [] => None,
    }
}
