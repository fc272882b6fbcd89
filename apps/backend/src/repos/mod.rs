//! Repository traits for domain layer.

pub mod game_state;
