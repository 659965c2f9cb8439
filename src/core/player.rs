//! Players: seat identifiers, colours, and per-seat records.
//!
//! ## PlayerId
//!
//! Seat index in turn order. Seat 0 acts first in every phase.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access by `PlayerId`.
//! A match holds between 1 and [`MAX_PLAYERS`](super::config::MAX_PLAYERS) seats.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::MAX_PLAYERS;
use crate::board::Coord;
use crate::cards::Card;
use crate::scoring::Chain;

/// Seat identifier. Doubles as the position in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that acts after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a match with `player_count` players.
    ///
    /// ```
    /// use kompromat::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Token colour. The palette bounds the number of seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Magenta,
}

impl PlayerColor {
    /// Palette in seat order.
    pub const PALETTE: [PlayerColor; MAX_PLAYERS] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
        PlayerColor::Purple,
        PlayerColor::Orange,
        PlayerColor::Cyan,
        PlayerColor::Magenta,
    ];
}

/// One seat at the table.
///
/// `hand` and `chains` are persistent vectors, so cloning a player
/// during a transition shares their storage until one side writes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    /// Running total of committed chain points; can go negative.
    pub score: i32,
    pub hand: Vector<Card>,
    pub chains: Vector<Chain>,
    /// Token position. `None` until placed during `setup_token`.
    pub position: Option<Coord>,
    /// Reserved; no transition sets it.
    pub is_eliminated: bool,
}

impl Player {
    /// Create a seat with an empty hand and no token on the board.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            score: 0,
            hand: Vector::new(),
            chains: Vector::new(),
            position: None,
            is_eliminated: false,
        }
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Index of a card in hand by id.
    #[must_use]
    pub fn hand_index(&self, card: &crate::cards::CardId) -> Option<usize> {
        self.hand.iter().position(|c| &c.id == card)
    }

    /// Remove a card from hand by id.
    ///
    /// Returns the removed card, or `None` if it was not held.
    pub fn take_from_hand(&mut self, card: &crate::cards::CardId) -> Option<Card> {
        let index = self.hand_index(card)?;
        Some(self.hand.remove(index))
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kompromat::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i32> = PlayerMap::new(4, |_| 0);
/// scores[PlayerId::new(1)] = 4;
/// assert_eq!(scores[PlayerId::new(1)], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= u8::MAX as usize, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
