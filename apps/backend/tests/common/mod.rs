#![allow(dead_code)]

// tests/common/mod.rs
use backend::domain::{Color, GameState};
use backend::infra::state::build_state;
use backend::AppState;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const TEST_SEED: u64 = 0x5eed;

/// Fresh seeded state at level 1.
pub fn seeded_state() -> AppState {
    build_state()
        .with_seed(Some(TEST_SEED))
        .build()
        .expect("build seeded app state")
}

/// State whose in-memory store starts from the given shape.
pub fn state_with(level: u32, sequence: Vec<Color>, high_score: u32) -> AppState {
    let initial = GameState::from_parts(level, sequence, high_score).expect("valid game state");
    build_state()
        .with_seed(Some(TEST_SEED))
        .with_initial_state(initial)
        .build()
        .expect("build app state")
}

/// Wire names of a sequence, as a client would send them.
pub fn wire(colors: &[Color]) -> Vec<&'static str> {
    colors.iter().map(|c| c.as_str()).collect()
}
