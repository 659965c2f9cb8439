//! Match configuration and rule constants.
//!
//! A match is configured once at creation:
//! - `GameMode`: selects the time limit
//! - `DeckExhaustedPolicy`: what a draw from an empty deck does
//! - `MatchSettings`: everything above plus the seat count, kept in the state

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Soft hand cap. A hand above it forces a placement.
pub const HAND_LIMIT: usize = 5;

/// Cards dealt to each seat at creation.
pub const STARTING_HAND: usize = 5;

/// Minimum size of a caller-supplied card source.
pub const MIN_CUSTOM_DECK: usize = 10;

/// Seats supported; one per palette colour.
pub const MAX_PLAYERS: usize = 8;

/// Match length preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// 15 minute match.
    #[default]
    Light,
    /// 30 minute match.
    Advanced,
}

impl GameMode {
    /// Countdown length in seconds.
    #[must_use]
    pub const fn time_limit_secs(self) -> u32 {
        match self {
            GameMode::Light => 15 * 60,
            GameMode::Advanced => 30 * 60,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Light => write!(f, "light"),
            GameMode::Advanced => write!(f, "advanced"),
        }
    }
}

/// Behaviour of a draw when the deck is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckExhaustedPolicy {
    /// Log the empty deck and keep playing.
    #[default]
    Continue,
    /// Conclude the match as soon as a draw finds the deck empty.
    EndMatch,
}

/// Settings fixed at match creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub player_count: usize,
    pub mode: GameMode,
    /// Countdown length; derived from `mode`.
    pub time_limit_secs: u32,
    pub deck_exhausted: DeckExhaustedPolicy,
    /// Seed the deck was shuffled with.
    pub seed: u64,
}

impl MatchSettings {
    /// Create settings for a match.
    #[must_use]
    pub fn new(player_count: usize, mode: GameMode, seed: u64) -> Self {
        Self {
            player_count,
            mode,
            time_limit_secs: mode.time_limit_secs(),
            deck_exhausted: DeckExhaustedPolicy::default(),
            seed,
        }
    }

    /// Set the deck-exhaustion policy.
    #[must_use]
    pub fn with_deck_exhausted(mut self, policy: DeckExhaustedPolicy) -> Self {
        self.deck_exhausted = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_time_limits() {
        assert_eq!(GameMode::Light.time_limit_secs(), 900);
        assert_eq!(GameMode::Advanced.time_limit_secs(), 1800);
        assert_eq!(GameMode::default(), GameMode::Light);
    }

    #[test]
    fn test_settings_follow_mode() {
        let settings = MatchSettings::new(3, GameMode::Advanced, 9);

        assert_eq!(settings.time_limit_secs, 1800);
        assert_eq!(settings.deck_exhausted, DeckExhaustedPolicy::Continue);

        let settings = settings.with_deck_exhausted(DeckExhaustedPolicy::EndMatch);
        assert_eq!(settings.deck_exhausted, DeckExhaustedPolicy::EndMatch);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = MatchSettings::new(2, GameMode::Light, 42);
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: MatchSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
