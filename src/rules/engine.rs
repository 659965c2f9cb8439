//! Rules engine trait.
//!
//! A `RulesEngine` answers three questions about a state:
//! - Which actions are legal for the acting seat
//! - What state an action leads to
//! - Whether the match is over, and how it ended
//!
//! Drivers (a UI, a bot, a replay tool) talk to the engine through this
//! trait and never call the transitions directly.

use tracing::debug;

use super::moves::valid_moves;
use super::transitions::{declare_chain, draw_card, execute_move, pass_turn, place_card, place_token};
use crate::cards::Card;
use crate::core::config::HAND_LIMIT;
use crate::core::{Action, ActionError, GameState, Phase, PlayerId};
use crate::scoring::{final_standings, validate_chain};

/// Result of a concluded match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Shared top score; every seat listed tied for first.
    Tied(Vec<PlayerId>),
}

impl GameResult {
    /// Did a seat win or share the win?
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tied(ps) => ps.contains(&player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the match is over
/// - `apply_action`: deterministic; never modifies its input
/// - `is_terminal`: `None` while the match continues
pub trait RulesEngine {
    /// Every action the acting seat may take.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for the acting seat.
    ///
    /// # Errors
    ///
    /// The transition's `ActionError` if the action is refused.
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, ActionError>;

    /// How the match ended, if it has.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Is `action` among the legal actions?
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}

/// The standard knight-move rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl StandardRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn placements(state: &GameState, out: &mut Vec<Action>) {
        let targets = valid_moves(state, state.current_player);
        for card in state.current().hand.iter() {
            for &at in &targets {
                out.push(Action::PlaceCard {
                    card: card.id.clone(),
                    at,
                });
            }
        }
    }

    /// Every 3- and 4-card subset of the hand that passes validation.
    fn declarations(state: &GameState, out: &mut Vec<Action>) {
        let hand: Vec<&Card> = state.current().hand.iter().collect();
        let n = hand.len();

        let mut push_if_valid = |picked: &[usize]| {
            let cards: Vec<Card> = picked.iter().map(|&i| hand[i].clone()).collect();
            if validate_chain(&cards).is_valid {
                out.push(Action::declare(cards.into_iter().map(|c| c.id)));
            }
        };

        for a in 0..n {
            for b in a + 1..n {
                for c in b + 1..n {
                    push_if_valid(&[a, b, c]);
                    for d in c + 1..n {
                        push_if_valid(&[a, b, c, d]);
                    }
                }
            }
        }
    }
}

impl RulesEngine for StandardRules {
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let mut actions = Vec::new();
        if state.is_game_over {
            return actions;
        }

        match state.phase {
            Phase::Setup => Self::placements(state, &mut actions),
            Phase::SetupToken => actions.extend(
                valid_moves(state, state.current_player)
                    .into_iter()
                    .map(|at| Action::PlaceToken { at }),
            ),
            Phase::Move => {
                if let Some(from) = state.current().position {
                    actions.extend(
                        valid_moves(state, state.current_player)
                            .into_iter()
                            .map(|to| Action::Move { from, to }),
                    );
                }
            }
            Phase::Draw => actions.push(Action::Draw),
            Phase::PlaceAfterMove | Phase::PlaceAfterDraw => Self::placements(state, &mut actions),
            Phase::Place => {
                Self::placements(state, &mut actions);
                if state.hand_size() <= HAND_LIMIT {
                    actions.push(Action::Pass);
                }
            }
            Phase::End => {}
        }

        if state.phase.is_in_turn() {
            Self::declarations(state, &mut actions);
        }

        actions
    }

    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, ActionError> {
        debug!(%action, player = %state.current_player, "applying");
        match action {
            Action::PlaceCard { card, at } => place_card(state, card, *at),
            Action::PlaceToken { at } => place_token(state, *at),
            Action::Move { from, to } => execute_move(state, *from, *to),
            Action::Draw => draw_card(state),
            Action::Pass => pass_turn(state),
            Action::DeclareChain { cards } => declare_chain(state, cards),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_game_over {
            return None;
        }

        if let Some(winner) = state.winner {
            return Some(GameResult::Winner(winner));
        }

        let standings = final_standings(state);
        let best = standings.first().map(|s| s.final_score)?;
        Some(GameResult::Tied(
            standings
                .iter()
                .take_while(|s| s.final_score == best)
                .map(|s| s.player)
                .collect(),
        ))
    }
}
