//! Domain layer: pure game logic types and helpers.

pub mod color;
pub mod sequence;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;

// Re-exports for ergonomics
pub use color::Color;
pub use sequence::{generate_with, SequenceGenerator};
pub use state::{GameState, Progression};
