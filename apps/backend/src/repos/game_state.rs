//! Game state repository seam.
//!
//! The service only ever talks to a [`GameStateStore`]. The in-memory adapter
//! is process-local; a deployment with several processes needs an adapter over
//! a shared key-value store that honors the same compare-and-swap contract.

use async_trait::async_trait;

use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

/// A game state paired with the store's write counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub version: u64,
    pub value: T,
}

impl<T> Versioned<T> {
    pub fn new(version: u64, value: T) -> Self {
        Self { version, value }
    }
}

#[async_trait]
pub trait GameStateStore: Send + Sync {
    /// Current state and its version.
    async fn load(&self) -> Result<Versioned<GameState>, DomainError>;

    /// Replace the state if the stored version still equals `expected_version`.
    ///
    /// Returns the new versioned state, or `Conflict(OptimisticLock, ..)` if
    /// another writer got there first.
    async fn compare_and_swap(
        &self,
        expected_version: u64,
        next: GameState,
    ) -> Result<Versioned<GameState>, DomainError>;
}
