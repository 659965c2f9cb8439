//! Match creation.

use im::Vector;
use tracing::{info, instrument};

use crate::cards::{Card, CardSource};
use crate::core::config::{DeckExhaustedPolicy, GameMode, MatchSettings, MAX_PLAYERS, STARTING_HAND};
use crate::core::{GameRng, GameState, Player, PlayerColor, PlayerMap, SetupError};

/// Builder for a fresh match.
///
/// ## Example
///
/// ```
/// use kompromat::core::{GameMode, Phase};
/// use kompromat::rules::MatchBuilder;
///
/// let state = MatchBuilder::new()
///     .player_count(3)
///     .mode(GameMode::Advanced)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(state.phase, Phase::Setup);
/// assert_eq!(state.time_left, 1800);
/// assert_eq!(state.deck.len(), 48 - 15);
/// ```
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    player_count: usize,
    mode: GameMode,
    source: CardSource,
    names: Vec<String>,
    deck_exhausted: DeckExhaustedPolicy,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            mode: GameMode::default(),
            source: CardSource::default(),
            names: Vec::new(),
            deck_exhausted: DeckExhaustedPolicy::default(),
        }
    }
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seats. Checked by [`MatchBuilder::build`].
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn card_source(mut self, source: CardSource) -> Self {
        self.source = source;
        self
    }

    /// Deal from a caller-supplied list instead of the built-in set.
    #[must_use]
    pub fn custom_deck(self, cards: Vec<Card>) -> Self {
        self.card_source(CardSource::Custom(cards))
    }

    /// Seat names in turn order. Seats without a name get "Player N".
    #[must_use]
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn deck_exhausted(mut self, policy: DeckExhaustedPolicy) -> Self {
        self.deck_exhausted = policy;
        self
    }

    /// Shuffle, deal and return the match in `setup`.
    ///
    /// Each seat is dealt `STARTING_HAND` cards in turn order, taken from
    /// the top of the shuffled deck. A short deck deals what it has.
    ///
    /// # Errors
    ///
    /// `SetupError::PlayerCount` unless `1 <= player_count <= MAX_PLAYERS`.
    #[instrument(skip(self), fields(players = self.player_count, mode = %self.mode))]
    pub fn build(self, seed: u64) -> Result<GameState, SetupError> {
        let count = self.player_count;
        if count == 0 || count > MAX_PLAYERS {
            return Err(SetupError::PlayerCount(count));
        }

        let mut cards = self.source.into_cards();
        GameRng::new(seed).for_context("deck").shuffle(&mut cards);

        let mut players = PlayerMap::new(count, |id| {
            let name = self
                .names
                .get(id.index())
                .cloned()
                .unwrap_or_else(|| id.to_string());
            Player::new(id, name, PlayerColor::PALETTE[id.index()])
        });

        for (_, player) in players.iter_mut() {
            for _ in 0..STARTING_HAND {
                match cards.pop() {
                    Some(card) => player.hand.push_back(card),
                    None => break,
                }
            }
        }

        let settings = MatchSettings::new(count, self.mode, seed).with_deck_exhausted(self.deck_exhausted);
        let deck: Vector<Card> = cards.into_iter().collect();

        let mut state = GameState::new(settings, players, deck);
        state.log("The match has started. Build the board!");

        info!(seed, deck = state.deck.len(), "match created");
        Ok(state)
    }
}

/// Create a match with a random seed and the built-in cards.
///
/// # Errors
///
/// See [`MatchBuilder::build`].
pub fn create_initial_state(player_count: usize, mode: GameMode) -> Result<GameState, SetupError> {
    MatchBuilder::new()
        .player_count(player_count)
        .mode(mode)
        .build(rand::random())
}
