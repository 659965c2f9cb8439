//! Binary snapshots of a match.
//!
//! The engine never stores state itself. These helpers give a persistence
//! collaborator a compact encoding of the full state.

use super::config::MAX_PLAYERS;
use super::error::SnapshotError;
use super::state::GameState;

impl GameState {
    /// Encode the full state with bincode.
    ///
    /// # Errors
    ///
    /// `SnapshotError::Encode` if serialization fails.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a state produced by [`GameState::to_snapshot`].
    ///
    /// # Errors
    ///
    /// `SnapshotError::Decode` on truncated or foreign bytes, and
    /// `SnapshotError::Invalid` when the decoded state breaks a structural
    /// invariant the transitions index on.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: GameState = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        state.check_structure().map_err(SnapshotError::Invalid)?;
        Ok(state)
    }

    fn check_structure(&self) -> Result<(), String> {
        let count = self.player_count();
        if count == 0 || count > MAX_PLAYERS {
            return Err(format!("{count} seats"));
        }
        if count != self.settings.player_count {
            return Err(format!(
                "{count} seats but settings name {}",
                self.settings.player_count
            ));
        }
        if self.current_player.index() >= count {
            return Err(format!("{} is not seated", self.current_player));
        }
        if let Some(winner) = self.winner {
            if winner.index() >= count {
                return Err(format!("winner {winner} is not seated"));
            }
        }
        if !self.board.is_well_formed() {
            return Err("board has the wrong number of cells".to_string());
        }

        let mut tokens = Vec::with_capacity(count);
        for (seat, player) in self.players.iter() {
            if player.id != seat {
                return Err(format!("{seat} carries the id of {}", player.id));
            }
            if let Some(at) = player.position {
                if !at.in_bounds() {
                    return Err(format!("{seat} stands off the board at {at}"));
                }
                if tokens.contains(&at) {
                    return Err(format!("two tokens share {at}"));
                }
                tokens.push(at);
            }
        }

        if let Some(id) = &self.last_drawn {
            if self.current().hand_index(id).is_none() {
                return Err(format!("last drawn card {id} is not in hand"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Coord;
    use crate::cards::CardId;
    use crate::core::config::GameMode;
    use crate::core::{GameState, Phase, PlayerId, SnapshotError};
    use crate::rules::{pass_turn, MatchBuilder};

    fn restore(state: &GameState) -> Result<GameState, SnapshotError> {
        GameState::from_snapshot(&state.to_snapshot().unwrap())
    }

    #[test]
    fn test_snapshot_restores_state() {
        let state = MatchBuilder::new()
            .player_count(3)
            .mode(GameMode::Advanced)
            .build(42)
            .unwrap();

        let bytes = state.to_snapshot().unwrap();
        let restored = GameState::from_snapshot(&bytes).unwrap();

        assert_eq!(state, restored);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        let err = GameState::from_snapshot(&[1, 2, 3]).unwrap_err();
        assert!(err.to_string().starts_with("Snapshot decoding failed"));
    }

    #[test]
    fn test_snapshot_rejects_unseated_current_player() {
        let mut state = MatchBuilder::new().player_count(2).build(5).unwrap();
        state.current_player = PlayerId::new(5);
        state.phase = Phase::Place;

        let err = restore(&state).unwrap_err();
        assert!(matches!(err, SnapshotError::Invalid(_)));
        assert!(err.to_string().contains("Player 6 is not seated"));
    }

    #[test]
    fn test_snapshot_rejects_broken_tokens() {
        let mut state = MatchBuilder::new().player_count(2).build(5).unwrap();
        state.players[PlayerId::new(0)].position = Some(Coord::new(12, 0));
        assert!(matches!(restore(&state), Err(SnapshotError::Invalid(_))));

        state.players[PlayerId::new(0)].position = Some(Coord::new(3, 3));
        state.players[PlayerId::new(1)].position = Some(Coord::new(3, 3));
        assert!(matches!(restore(&state), Err(SnapshotError::Invalid(_))));
    }

    #[test]
    fn test_snapshot_rejects_stale_last_drawn() {
        let mut state = MatchBuilder::new().player_count(2).build(5).unwrap();
        state.last_drawn = Some(CardId::from("not-dealt"));
        assert!(matches!(restore(&state), Err(SnapshotError::Invalid(_))));
    }

    #[test]
    fn test_restored_state_accepts_transitions() {
        let mut state = MatchBuilder::new().player_count(2).build(5).unwrap();
        state.phase = Phase::Place;

        let restored = restore(&state).unwrap();
        let passed = pass_turn(&restored).unwrap();
        assert_eq!(passed.current_player, PlayerId::new(1));
    }
}
