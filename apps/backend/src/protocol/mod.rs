//! Wire protocol types shared by the HTTP routes.

pub mod game_state;
