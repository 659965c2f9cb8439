//! State transitions.
//!
//! Each transition takes the current state by reference and returns the
//! next one, or the reason the action was refused. The input is never
//! modified; a refused action leaves no trace in the state.
//!
//! All transitions act for `state.current_player`.

use rustc_hash::FxHashSet;
use tracing::{debug, info, instrument};

use super::clock::{finish, EndReason};
use super::moves::{knight_moves, setup_cells};
use crate::board::Coord;
use crate::cards::{Card, CardId};
use crate::core::config::{DeckExhaustedPolicy, HAND_LIMIT};
use crate::core::{ActionError, GameState, Phase};
use crate::scoring::{validate_chain, Chain, ChainReason, ChainValidation};

fn ensure_live(state: &GameState) -> Result<(), ActionError> {
    if state.is_game_over {
        Err(ActionError::GameOver)
    } else {
        Ok(())
    }
}

fn ensure_phase(state: &GameState, allowed: impl Fn(Phase) -> bool) -> Result<(), ActionError> {
    ensure_live(state)?;
    if allowed(state.phase) {
        Ok(())
    } else {
        Err(ActionError::WrongPhase(state.phase))
    }
}

fn ensure_on_board(at: Coord) -> Result<(), ActionError> {
    if at.in_bounds() {
        Ok(())
    } else {
        Err(ActionError::OutOfBounds(at))
    }
}

/// Move the acting token by a knight jump.
///
/// Landing on a card picks it up. A pickup that leaves more than
/// `HAND_LIMIT` cards in hand forces a placement before the draw.
///
/// # Errors
///
/// - `WrongPhase` outside `move`
/// - `WrongOrigin` if `from` is not the acting token's cell
/// - `OutOfBounds` / `IllegalTarget` if `to` is not a legal knight move
#[instrument(skip(state), fields(player = %state.current_player), err(level = "debug"))]
pub fn execute_move(state: &GameState, from: Coord, to: Coord) -> Result<GameState, ActionError> {
    ensure_phase(state, |p| p == Phase::Move)?;

    if state.current().position != Some(from) {
        return Err(ActionError::WrongOrigin(from));
    }
    ensure_on_board(to)?;
    if !knight_moves(state, state.current_player).contains(&to) {
        return Err(ActionError::IllegalTarget(to));
    }

    let mut next = state.clone();
    let picked = next.board.take(to);
    let name = next.current().name.clone();
    next.last_drawn = None;

    let player = next.current_mut();
    player.position = Some(to);

    match picked {
        Some(card) => {
            debug!(card = %card.id, "picked up");
            player.hand.push_back(card.facing(false));
            next.log(format!("{name} picked up a card."));
        }
        None => next.log(format!("{name} moved to an empty cell.")),
    }

    if next.over_hand_limit() {
        next.phase = Phase::PlaceAfterMove;
        next.log(format!("{name}'s hand is full and must place a card!"));
    } else {
        next.phase = Phase::Draw;
    }

    Ok(next)
}

/// Take the top card of the deck.
///
/// On an empty deck the phase still advances to `place`; with
/// `DeckExhaustedPolicy::EndMatch` the match concludes instead.
///
/// # Errors
///
/// `WrongPhase` outside `draw`.
#[instrument(skip(state), fields(player = %state.current_player), err(level = "debug"))]
pub fn draw_card(state: &GameState) -> Result<GameState, ActionError> {
    ensure_phase(state, |p| p == Phase::Draw)?;

    let mut next = state.clone();
    let name = next.current().name.clone();

    let Some(card) = next.deck.pop_back() else {
        next.log("The deck is empty!");
        match next.settings.deck_exhausted {
            DeckExhaustedPolicy::Continue => next.phase = Phase::Place,
            DeckExhaustedPolicy::EndMatch => finish(&mut next, EndReason::DeckExhausted),
        }
        return Ok(next);
    };

    next.last_drawn = Some(card.id.clone());
    next.current_mut().hand.push_back(card);
    next.log(format!("{name} drew a card from the deck."));

    next.phase = if next.over_hand_limit() {
        Phase::PlaceAfterDraw
    } else {
        Phase::Place
    };

    Ok(next)
}

/// Put a hand card on the board.
///
/// During `setup` the card goes face-down on a cell from
/// [`setup_cells`](super::moves::setup_cells) and the action passes to the
/// next seat still holding cards. Once every hand is empty the match moves
/// to `setup_token`.
///
/// In the placement phases the card lands on a cell free of cards and
/// tokens. It lies face-down only if it is the card drawn this turn. A
/// placement in `place_after_move` leads to the draw; any other ends the
/// turn.
///
/// # Errors
///
/// - `WrongPhase` outside `setup` and the placement phases
/// - `OutOfBounds`, `CardNotInHand`, `CellHasCard`, `CellHasToken`
/// - `IllegalTarget` for a setup cell not touching the existing cards
#[instrument(skip(state), fields(player = %state.current_player), err(level = "debug"))]
pub fn place_card(state: &GameState, card: &CardId, at: Coord) -> Result<GameState, ActionError> {
    ensure_phase(state, |p| p == Phase::Setup || p.is_placement())?;
    ensure_on_board(at)?;

    if state.current().hand_index(card).is_none() {
        return Err(ActionError::CardNotInHand(card.clone()));
    }
    if state.board.has_card(at) {
        return Err(ActionError::CellHasCard(at));
    }
    if state.has_token(at) {
        return Err(ActionError::CellHasToken(at));
    }

    if state.phase == Phase::Setup {
        if !setup_cells(state).contains(&at) {
            return Err(ActionError::IllegalTarget(at));
        }
        return place_during_setup(state, card, at);
    }

    let mut next = state.clone();
    let name = next.current().name.clone();
    let hidden = next.last_drawn.as_ref() == Some(card);

    let Some(taken) = next.current_mut().take_from_hand(card) else {
        return Err(ActionError::CardNotInHand(card.clone()));
    };
    next.board.place(at, taken.facing(hidden));

    if hidden {
        next.last_drawn = None;
        next.log(format!("{name} placed a HIDDEN card from the deck."));
    } else {
        next.log(format!("{name} placed an OPEN card from hand."));
    }

    if next.phase == Phase::PlaceAfterMove {
        next.phase = Phase::Draw;
    } else {
        next.end_turn();
    }

    Ok(next)
}

fn place_during_setup(state: &GameState, card: &CardId, at: Coord) -> Result<GameState, ActionError> {
    let mut next = state.clone();
    let name = next.current().name.clone();

    let Some(taken) = next.current_mut().take_from_hand(card) else {
        return Err(ActionError::CardNotInHand(card.clone()));
    };
    next.board.place(at, taken.facing(true));
    next.log(format!("{name} placed a card to build the board."));

    if next.players.values().all(|p| p.hand.is_empty()) {
        next.rotate_seat();
        next.phase = Phase::SetupToken;
        next.log("The board is ready! Place your tokens.");
        info!(cards = next.board.card_count(), "board built");
        return Ok(next);
    }

    // Seats dealt a short hand drop out of the rotation once empty.
    next.rotate_seat();
    while next.current().hand.is_empty() {
        next.rotate_seat();
    }
    Ok(next)
}

/// Refuse any verdict that is not valid, whether or not it names a reason.
fn admit(verdict: ChainValidation, size: usize) -> Result<ChainValidation, ActionError> {
    if verdict.is_valid {
        return Ok(verdict);
    }
    let reason = verdict.reason.unwrap_or(ChainReason::WrongSize(size));
    Err(ActionError::InvalidChain(reason))
}

/// Put the acting seat's token on the board.
///
/// The action passes to the next seat; once every token is down the match
/// enters `move`.
///
/// # Errors
///
/// `WrongPhase` outside `setup_token`, `OutOfBounds`, `CellHasCard`,
/// `CellHasToken`.
#[instrument(skip(state), fields(player = %state.current_player), err(level = "debug"))]
pub fn place_token(state: &GameState, at: Coord) -> Result<GameState, ActionError> {
    ensure_phase(state, |p| p == Phase::SetupToken)?;
    ensure_on_board(at)?;

    if state.board.has_card(at) {
        return Err(ActionError::CellHasCard(at));
    }
    if state.has_token(at) {
        return Err(ActionError::CellHasToken(at));
    }

    let mut next = state.clone();
    let name = next.current().name.clone();
    next.current_mut().position = Some(at);
    next.log(format!("{name} placed their token."));
    next.rotate_seat();

    if next.players.values().all(|p| p.position.is_some()) {
        next.phase = Phase::Move;
        next.log("All tokens are in place. Movement begins!");
        info!("play begins");
    }

    Ok(next)
}

/// Skip the optional placement and end the turn.
///
/// # Errors
///
/// `WrongPhase` outside `place`; `HandOverLimit` while holding more than
/// `HAND_LIMIT` cards.
#[instrument(skip(state), fields(player = %state.current_player), err(level = "debug"))]
pub fn pass_turn(state: &GameState) -> Result<GameState, ActionError> {
    ensure_phase(state, |p| p == Phase::Place)?;

    if state.over_hand_limit() {
        return Err(ActionError::HandOverLimit(state.hand_size()));
    }

    let mut next = state.clone();
    let name = next.current().name.clone();
    next.log(format!("{name} passed."));
    next.end_turn();
    Ok(next)
}

/// Commit 3 or 4 hand cards as a chain.
///
/// Allowed at any point of the acting seat's turn. The cards leave the hand
/// and the chain's points (negative for a mismatched chain) are added to the
/// running score. If this brings a forced placement back within the hand
/// limit, the forced phase is lifted.
///
/// # Errors
///
/// - `WrongPhase` outside the turn phases
/// - `DuplicateCard` if an id is named twice
/// - `CardNotInHand`
/// - `InvalidChain` if the cards fail the size or composition checks
#[instrument(skip(state), fields(player = %state.current_player), err(level = "debug"))]
pub fn declare_chain(state: &GameState, cards: &[CardId]) -> Result<GameState, ActionError> {
    ensure_phase(state, Phase::is_in_turn)?;

    let mut seen = FxHashSet::default();
    for id in cards {
        if !seen.insert(id) {
            return Err(ActionError::DuplicateCard(id.clone()));
        }
    }

    let hand = &state.current().hand;
    let declared: Vec<Card> = cards
        .iter()
        .map(|id| {
            hand.iter()
                .find(|c| &c.id == id)
                .cloned()
                .ok_or_else(|| ActionError::CardNotInHand(id.clone()))
        })
        .collect::<Result<_, _>>()?;

    let verdict = admit(validate_chain(&declared), declared.len())?;

    let mut next = state.clone();
    let name = next.current().name.clone();
    let chain_id = next.alloc_chain_id();

    let player = next.current_mut();
    player.hand.retain(|c| !cards.contains(&c.id));
    player.score += verdict.points;
    player
        .chains
        .push_back(Chain::committed(chain_id, declared, verdict.points));

    if next.last_drawn.as_ref().is_some_and(|id| cards.contains(id)) {
        next.last_drawn = None;
    }

    if verdict.points > 0 {
        next.log(format!("{name} declared a chain (+{} points).", verdict.points));
    } else {
        next.log(format!("{name} declared a WRONG chain ({} points).", verdict.points));
    }
    info!(chain = %chain_id, points = verdict.points, "chain declared");

    if next.hand_size() <= HAND_LIMIT {
        match next.phase {
            Phase::PlaceAfterMove => next.phase = Phase::Draw,
            Phase::PlaceAfterDraw => next.phase = Phase::Place,
            _ => {}
        }
    }

    Ok(next)
}
