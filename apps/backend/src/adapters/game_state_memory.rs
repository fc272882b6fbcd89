//! Process-local game state store.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::state::GameState;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::game_state::{GameStateStore, Versioned};

/// Single shared game state behind a mutex. Lives for the process lifetime.
#[derive(Debug)]
pub struct InMemoryGameStateStore {
    slot: Mutex<Versioned<GameState>>,
}

impl InMemoryGameStateStore {
    pub fn new(initial: GameState) -> Self {
        Self {
            slot: Mutex::new(Versioned::new(0, initial)),
        }
    }
}

#[async_trait]
impl GameStateStore for InMemoryGameStateStore {
    async fn load(&self) -> Result<Versioned<GameState>, DomainError> {
        Ok(self.slot.lock().clone())
    }

    async fn compare_and_swap(
        &self,
        expected_version: u64,
        next: GameState,
    ) -> Result<Versioned<GameState>, DomainError> {
        let mut slot = self.slot.lock();
        if slot.version != expected_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Game state version changed: expected {expected_version}, found {}",
                    slot.version
                ),
            ));
        }
        *slot = Versioned::new(slot.version + 1, next);
        Ok(slot.clone())
    }
}
