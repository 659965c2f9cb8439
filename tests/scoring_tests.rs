//! Chain scoring against the built-in card set.

mod common;

use kompromat::scoring::{FULL_CHAIN_POINTS, SHORT_CHAIN_POINTS};
use kompromat::{
    calculate_final_score, conclude, declare_chain, final_standings, validate_chain, Card,
    CardId, CardKind, ChainReason, EndReason, GameState, MatchBuilder, Phase,
};

use common::{builtin as builtin_lookup, play_to_move_phase};

fn ids(names: &[&str]) -> Vec<CardId> {
    names.iter().map(|&n| CardId::from(n)).collect()
}

/// A state in `move` where the acting seat holds the named built-in cards.
fn holding(names: &[&str]) -> GameState {
    let mut state = play_to_move_phase(MatchBuilder::new().player_count(2).build(14).unwrap());
    let seat = state.current_player;
    state.players[seat].hand = names.iter().map(|&n| builtin_lookup(n)).collect();
    state
}

#[test]
fn test_every_builtin_chain_scores_full() {
    let cards = kompromat::cards::builtin_cards();
    for group in cards.chunks(4) {
        let result = validate_chain(group);
        assert!(result.is_valid);
        assert_eq!(result.points, FULL_CHAIN_POINTS, "{}", group[0].chain);

        let result = validate_chain(&group[..3]);
        assert_eq!(result.points, SHORT_CHAIN_POINTS);
    }
}

#[test]
fn test_cross_chain_declaration_is_penalised() {
    let cards = [
        builtin_lookup("eger-1"),
        builtin_lookup("mohacs-2"),
        builtin_lookup("eger-3"),
        builtin_lookup("eger-4"),
    ];
    let result = validate_chain(&cards);
    assert!(result.is_valid);
    assert_eq!(result.points, -FULL_CHAIN_POINTS);
    assert_eq!(result.reason, Some(ChainReason::Mismatched));
}

#[test]
fn test_two_dates_and_event_is_refused() {
    let cards = [
        builtin_lookup("eger-4"),
        builtin_lookup("mohacs-4"),
        builtin_lookup("eger-3"),
    ];
    assert_eq!(validate_chain(&cards).reason, Some(ChainReason::MissingCoreKind));
}

#[test]
fn test_running_score_and_final_score() {
    let state = holding(&[
        "trianon-1", "trianon-2", "trianon-3", "trianon-4", "eger-1",
    ]);
    let seat = state.current_player;

    let state = declare_chain(&state, &ids(&["trianon-1", "trianon-2", "trianon-3", "trianon-4"])).unwrap();
    assert_eq!(state.players[seat].score, 4);
    assert_eq!(state.phase, Phase::Move);

    let over = conclude(&state, EndReason::Abandoned).unwrap();
    assert_eq!(over.players[seat].score, 3);
    assert_eq!(over.winner, Some(seat));

    let standings = final_standings(&over);
    assert_eq!(standings[0].player, seat);
    assert_eq!(standings[0].final_score, 3);
}

#[test]
fn test_negative_running_score() {
    let state = holding(&["eger-1", "mohacs-2", "eger-3"]);
    let seat = state.current_player;

    let state = declare_chain(&state, &ids(&["eger-1", "mohacs-2", "eger-3"])).unwrap();
    assert_eq!(state.players[seat].score, -SHORT_CHAIN_POINTS);
    assert!(!state.players[seat].chains[0].is_correct());
}

#[test]
fn test_worked_example() {
    let state = holding(&[
        "kiegyezes-1", "kiegyezes-2", "kiegyezes-3", "kiegyezes-4",
        "rakoczi-1", "rakoczi-2", "eger-3",
    ]);
    let seat = state.current_player;

    let state = declare_chain(&state, &ids(&["kiegyezes-1", "kiegyezes-2", "kiegyezes-3", "kiegyezes-4"])).unwrap();
    let state = declare_chain(&state, &ids(&["rakoczi-1", "rakoczi-2", "eger-3"])).unwrap();

    let player = &state.players[seat];
    assert_eq!(player.hand_size(), 0);
    assert_eq!(calculate_final_score(&player.chains, &player.hand), 2);

    let mut with_hand = state.clone();
    with_hand.players[seat].hand = ["a-1", "b-1", "c-1"]
        .into_iter()
        .map(|n| Card::new(n, CardKind::Person, n, n))
        .collect();
    let player = &with_hand.players[seat];
    assert_eq!(calculate_final_score(&player.chains, &player.hand), -1);
}
