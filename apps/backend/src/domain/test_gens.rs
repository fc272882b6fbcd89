// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::Color;

/// Generate a random Color
pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Yellow),
        Just(Color::Green),
        Just(Color::Blue),
    ]
}

/// A caller action against the game state.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Reset,
    SubmitCorrect,
    /// Correct length, one position replaced by a different color
    SubmitWrong { position_hint: usize, shift: u8 },
    SubmitEmpty,
    SubmitTooLong,
}

pub fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::Reset),
        5 => Just(Action::SubmitCorrect),
        2 => (any::<usize>(), 1u8..=3).prop_map(|(position_hint, shift)| Action::SubmitWrong {
            position_hint,
            shift
        }),
        1 => Just(Action::SubmitEmpty),
        1 => Just(Action::SubmitTooLong),
    ]
}

/// Replace the color at `position` with the one `shift` steps further round the board.
pub fn corrupt(sequence: &[Color], position_hint: usize, shift: u8) -> Vec<Color> {
    let mut out = sequence.to_vec();
    if out.is_empty() {
        return out;
    }
    let position = position_hint % out.len();
    let idx = Color::ALL
        .iter()
        .position(|c| *c == out[position])
        .unwrap_or(0);
    out[position] = Color::ALL[(idx + shift as usize) % Color::ALL.len()];
    out
}
