//! Match state.
//!
//! ## Phase
//!
//! Discriminator of the turn state machine. Every action is gated on it.
//!
//! ## GameState
//!
//! The single source of truth for one match:
//! - Seats (hands, committed chains, token positions, scores)
//! - Board, draw pile, discards
//! - Phase, turn counter, the card drawn this turn
//! - Countdown and terminal markers
//! - The player-facing event log
//!
//! All collections are `im` persistent structures. Transitions clone the
//! state in O(1) and write only the substructures they change, so the
//! caller's value is never touched.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::config::{MatchSettings, HAND_LIMIT};
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::{Board, Coord};
use crate::cards::{Card, CardId};
use crate::scoring::ChainId;

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Building the board from the dealt hands.
    Setup,
    /// Placing tokens on empty cells.
    SetupToken,
    /// Knight move.
    Move,
    /// Forced placement after a pickup pushed the hand over the limit.
    PlaceAfterMove,
    /// Draw from the deck.
    Draw,
    /// Forced placement after a draw pushed the hand over the limit.
    PlaceAfterDraw,
    /// Optional placement, or pass.
    Place,
    /// Match concluded.
    End,
}

impl Phase {
    /// Phases in which a hand card may be put on the board.
    #[must_use]
    pub const fn is_placement(self) -> bool {
        matches!(self, Phase::Place | Phase::PlaceAfterMove | Phase::PlaceAfterDraw)
    }

    /// Phases entered only because the hand exceeded the limit.
    #[must_use]
    pub const fn is_forced(self) -> bool {
        matches!(self, Phase::PlaceAfterMove | Phase::PlaceAfterDraw)
    }

    /// Phases of the regular turn cycle (after setup, before the end).
    #[must_use]
    pub const fn is_in_turn(self) -> bool {
        matches!(
            self,
            Phase::Move | Phase::PlaceAfterMove | Phase::Draw | Phase::PlaceAfterDraw | Phase::Place
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::SetupToken => "setup_token",
            Phase::Move => "move",
            Phase::PlaceAfterMove => "place_after_move",
            Phase::Draw => "draw",
            Phase::PlaceAfterDraw => "place_after_draw",
            Phase::Place => "place",
            Phase::End => "end",
        };
        f.write_str(name)
    }
}

/// Complete state of one match.
///
/// Fields are public for read access by presenters and persistence
/// collaborators. Mutate only through the transitions in [`crate::rules`];
/// they are what keep the invariants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub settings: MatchSettings,

    /// Seats in turn order.
    pub players: PlayerMap<Player>,

    /// Seat whose action is expected.
    pub current_player: PlayerId,

    pub board: Board,

    /// Draw pile; the top card is the last element.
    pub deck: Vector<Card>,

    /// Unused by the current rules.
    pub discards: Vector<Card>,

    /// Completed turns.
    pub turn_count: u32,

    pub phase: Phase,

    /// Card drawn from the deck this turn, while it is still in hand.
    pub last_drawn: Option<CardId>,

    /// Countdown in seconds, driven by an external clock.
    pub time_left: u32,

    pub is_game_over: bool,
    pub winner: Option<PlayerId>,

    /// Append-only, chronological event log.
    pub logs: Vector<String>,

    next_chain_id: u32,
}

impl GameState {
    /// Assemble a state in `setup` with an empty board.
    #[must_use]
    pub fn new(settings: MatchSettings, players: PlayerMap<Player>, deck: Vector<Card>) -> Self {
        let time_left = settings.time_limit_secs;
        Self {
            settings,
            players,
            current_player: PlayerId::new(0),
            board: Board::new(),
            deck,
            discards: Vector::new(),
            turn_count: 0,
            phase: Phase::Setup,
            last_drawn: None,
            time_left,
            is_game_over: false,
            winner: None,
            logs: Vector::new(),
            next_chain_id: 0,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The seat whose action is expected.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Player {
        let seat = self.current_player;
        &mut self.players[seat]
    }

    /// Hand size of the acting seat.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.current().hand_size()
    }

    /// Is the acting seat over the hand limit?
    #[must_use]
    pub fn over_hand_limit(&self) -> bool {
        self.hand_size() > HAND_LIMIT
    }

    /// Seat whose token stands on a cell.
    #[must_use]
    pub fn player_at(&self, at: Coord) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.position == Some(at))
            .map(|(id, _)| id)
    }

    /// Does any token stand on a cell?
    #[must_use]
    pub fn has_token(&self, at: Coord) -> bool {
        self.player_at(at).is_some()
    }

    /// Cards across deck, discards, hands, committed chains and the board.
    ///
    /// Constant over every transition.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let held: usize = self
            .players
            .values()
            .map(|p| p.hand.len() + p.chains.iter().map(|c| c.cards.len()).sum::<usize>())
            .sum();
        self.deck.len() + self.discards.len() + held + self.board.card_count()
    }

    /// Append to the event log.
    pub(crate) fn log(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        trace!(log = %entry, "event");
        self.logs.push_back(entry);
    }

    /// Pass the action to the next seat without ending a turn.
    pub(crate) fn rotate_seat(&mut self) {
        self.current_player = self.current_player.next(self.player_count());
    }

    /// Close the acting seat's turn and hand the move to the next seat.
    pub(crate) fn end_turn(&mut self) {
        self.rotate_seat();
        self.phase = Phase::Move;
        self.turn_count += 1;
        self.last_drawn = None;
    }

    /// Allocate the id for a newly committed chain.
    pub(crate) fn alloc_chain_id(&mut self) -> ChainId {
        let id = ChainId(self.next_chain_id);
        self.next_chain_id += 1;
        id
    }
}
