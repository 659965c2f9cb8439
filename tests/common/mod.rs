//! Shared helpers for the integration tests.

#![allow(dead_code)]

use kompromat::cards::builtin_cards;
use kompromat::{Action, Card, GameState, Phase, PlayerId, RulesEngine, StandardRules};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Install a subscriber once per test binary. `RUST_LOG` controls output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Apply the first legal action until the match reaches `move`.
pub fn play_to_move_phase(mut state: GameState) -> GameState {
    let rules = StandardRules::new();
    while state.phase != Phase::Move {
        let action = rules
            .legal_actions(&state)
            .into_iter()
            .next()
            .expect("setup always has a legal action");
        state = rules.apply_action(&state, &action).expect("legal action applies");
    }
    state
}

/// Pick a uniformly random legal action, or `None` if there is none.
pub fn random_action(state: &GameState, rng: &mut ChaCha8Rng) -> Option<Action> {
    let mut actions = StandardRules::new().legal_actions(state);
    if actions.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..actions.len());
    Some(actions.swap_remove(index))
}

/// Play up to `steps` random legal actions.
pub fn play_random(mut state: GameState, seed: u64, steps: usize) -> GameState {
    let rules = StandardRules::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..steps {
        let Some(action) = random_action(&state, &mut rng) else {
            break;
        };
        state = rules.apply_action(&state, &action).expect("legal action applies");
    }
    state
}

/// Seat ids in turn order.
pub fn seats(state: &GameState) -> Vec<PlayerId> {
    PlayerId::all(state.player_count()).collect()
}

/// A built-in card by id.
pub fn builtin(id: &str) -> Card {
    builtin_cards()
        .into_iter()
        .find(|c| c.id.as_str() == id)
        .unwrap_or_else(|| panic!("no built-in card {id}"))
}
