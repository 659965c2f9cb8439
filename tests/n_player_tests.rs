//! N-Player capability verification tests.
//!
//! These tests verify that the engine has no hidden 2-player assumptions
//! and works correctly for matches with 1-8 players.

mod common;

use kompromat::core::config::{MAX_PLAYERS, STARTING_HAND};
use kompromat::{
    pass_turn, GameMode, MatchBuilder, Phase, PlayerColor, PlayerId, RulesEngine, SetupError,
    StandardRules,
};

use common::{init_tracing, play_random, play_to_move_phase, seats};

/// Every legal seat count produces a dealt match.
#[test]
fn test_match_creation_all_counts() {
    init_tracing();
    for player_count in 1..=MAX_PLAYERS {
        let state = MatchBuilder::new().player_count(player_count).build(42).unwrap();

        assert_eq!(state.player_count(), player_count);
        assert_eq!(state.deck.len(), 48 - player_count * STARTING_HAND);
        assert_eq!(state.total_cards(), 48);

        for player in PlayerId::all(player_count) {
            assert_eq!(state.players[player].hand_size(), STARTING_HAND);
            assert_eq!(state.players[player].id, player);
        }
    }
}

#[test]
fn test_out_of_range_counts_rejected() {
    assert_eq!(
        MatchBuilder::new().player_count(0).build(1).unwrap_err(),
        SetupError::PlayerCount(0)
    );
    assert_eq!(
        MatchBuilder::new().player_count(MAX_PLAYERS + 1).build(1).unwrap_err(),
        SetupError::PlayerCount(MAX_PLAYERS + 1)
    );
}

/// Seat colours come from the palette and never repeat.
#[test]
fn test_distinct_colours() {
    let state = MatchBuilder::new().player_count(MAX_PLAYERS).build(5).unwrap();
    let colours: Vec<PlayerColor> = state.players.values().map(|p| p.color).collect();

    for (i, a) in colours.iter().enumerate() {
        for b in &colours[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

/// Setup and token placement reach `move` for every seat count.
#[test]
fn test_setup_completes_all_counts() {
    for player_count in 1..=MAX_PLAYERS {
        let state = MatchBuilder::new().player_count(player_count).build(7).unwrap();
        let ready = play_to_move_phase(state);

        assert_eq!(ready.board.card_count(), player_count * STARTING_HAND);
        assert!(ready.players.values().all(|p| p.hand.is_empty()));
        assert!(ready.players.values().all(|p| p.position.is_some()));
        assert!(ready.board.cards().all(|(_, c)| c.is_hidden));
        assert_eq!(ready.turn_count, 0);
    }
}

/// Turns rotate through every seat in order and wrap around.
#[test]
fn test_turn_rotation_n_players() {
    let player_count = 5;
    let mut state = play_to_move_phase(
        MatchBuilder::new().player_count(player_count).build(9).unwrap(),
    );

    let start = state.current_player;
    let order = seats(&state);
    let first = order.iter().position(|&p| p == start).unwrap();

    for turn in 0..player_count * 2 {
        let expected = order[(first + turn) % player_count];
        assert_eq!(state.current_player, expected);

        // Force the turn to its optional placement and pass.
        state.phase = Phase::Place;
        state = pass_turn(&state).unwrap();
    }
    assert_eq!(state.turn_count, (player_count * 2) as u32);
}

/// A single seat can play alone.
#[test]
fn test_solo_match() {
    let state = MatchBuilder::new().player_count(1).mode(GameMode::Advanced).build(3).unwrap();
    let state = play_random(state, 3, 200);

    assert_eq!(state.current_player, PlayerId::new(0));
    assert_eq!(state.total_cards(), 48);
}

/// Random play with many seats keeps every seat's hand within bounds.
#[test]
fn test_eight_player_random_play() {
    let rules = StandardRules::new();
    let state = MatchBuilder::new().player_count(8).build(17).unwrap();
    let state = play_random(state, 17, 400);

    assert!(state.current_player.index() < 8);
    assert!(state.players.values().all(|p| p.hand_size() <= 6));
    if !state.is_game_over {
        assert!(rules.is_terminal(&state).is_none());
    }
}
