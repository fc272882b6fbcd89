use std::sync::Arc;

use tracing::info;

use crate::adapters::game_state_memory::InMemoryGameStateStore;
use crate::domain::sequence::SequenceGenerator;
use crate::domain::state::GameState;
use crate::error::AppError;
use crate::repos::game_state::GameStateStore;
use crate::services::sequence::StoreBackedSequenceService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    rng_seed: Option<u64>,
    initial_state: Option<GameState>,
    store: Option<Arc<dyn GameStateStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            rng_seed: None,
            initial_state: None,
            store: None,
        }
    }

    /// Deterministic sequences from this seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Start the in-memory store from this state instead of a fresh level 1.
    pub fn with_initial_state(mut self, state: GameState) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Use an external store; `with_initial_state` is then ignored.
    pub fn with_store(mut self, store: Arc<dyn GameStateStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let generator = Arc::new(SequenceGenerator::new(self.rng_seed));

        let store = match self.store {
            Some(store) => store,
            None => {
                let initial = match self.initial_state {
                    Some(state) => state,
                    None => generator.with_rng(|rng| GameState::initial(rng)),
                };
                info!(
                    level = initial.level(),
                    seeded = self.rng_seed.is_some(),
                    "in-memory game state initialized"
                );
                Arc::new(InMemoryGameStateStore::new(initial)) as Arc<dyn GameStateStore>
            }
        };

        let service = StoreBackedSequenceService::new(store, generator);
        Ok(AppState::new(Arc::new(service)))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
