//! Sequence service: reset, read and validate over the shared game state.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::color::Color;
use crate::domain::sequence::SequenceGenerator;
use crate::domain::state::{GameState, Progression};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::game_state::{GameStateStore, Versioned};

/// Attempts per operation before a lost compare-and-swap race is reported.
pub const MAX_CAS_ATTEMPTS: usize = 8;

/// The three operations clients drive the game through.
#[async_trait]
pub trait SequenceService: Send + Sync {
    /// Level 1, new length-1 sequence, high score kept.
    async fn reset(&self) -> Result<GameState, DomainError>;

    /// Read-only snapshot.
    async fn state(&self) -> Result<GameState, DomainError>;

    /// Validate a submission and advance or soft reset the game.
    ///
    /// On a mismatch the soft reset is persisted before
    /// `DomainError::SequenceMismatch` is returned with the reset state.
    async fn validate(&self, submitted: &[Color]) -> Result<GameState, DomainError>;
}

/// [`SequenceService`] over any [`GameStateStore`], doing
/// load, transition, compare-and-swap with bounded retries.
pub struct StoreBackedSequenceService {
    store: Arc<dyn GameStateStore>,
    generator: Arc<SequenceGenerator>,
}

impl StoreBackedSequenceService {
    pub fn new(store: Arc<dyn GameStateStore>, generator: Arc<SequenceGenerator>) -> Self {
        Self { store, generator }
    }

    /// Repeatedly apply `transition` to the latest state until the write lands.
    ///
    /// `transition` returning `Err` aborts without writing.
    async fn update<T, F>(&self, mut transition: F) -> Result<(Versioned<GameState>, T), DomainError>
    where
        F: FnMut(&GameState, &SequenceGenerator) -> Result<(GameState, T), DomainError> + Send,
        T: Send,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let current = self.store.load().await?;
            let (next, extra) = transition(&current.value, &self.generator)?;

            match self.store.compare_and_swap(current.version, next).await {
                Ok(written) => return Ok((written, extra)),
                Err(DomainError::Conflict(ConflictKind::OptimisticLock, detail))
                    if attempt < MAX_CAS_ATTEMPTS =>
                {
                    warn!(attempt, detail = %detail, "game state write lost a race, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl SequenceService for StoreBackedSequenceService {
    async fn reset(&self) -> Result<GameState, DomainError> {
        let (written, ()) = self
            .update(|state, generator| Ok((generator.with_rng(|rng| state.reset(rng)), ())))
            .await?;
        info!(
            version = written.version,
            high_score = written.value.high_score(),
            "game reset"
        );
        Ok(written.value)
    }

    async fn state(&self) -> Result<GameState, DomainError> {
        Ok(self.store.load().await?.value)
    }

    async fn validate(&self, submitted: &[Color]) -> Result<GameState, DomainError> {
        let (written, cleared) = self
            .update(|state, generator| {
                let previous_high = state.high_score();
                match generator.with_rng(|rng| state.apply_submission(submitted, rng))? {
                    Progression::Cleared(next) => {
                        let record = next.high_score() > previous_high;
                        Ok((next, Some(record)))
                    }
                    Progression::Failed(next) => Ok((next, None)),
                }
            })
            .await
            .inspect_err(|e| {
                if e.is_submission_error() {
                    debug!(error = %e, "submission rejected before any state change");
                }
            })?;

        let state = written.value;
        match cleared {
            Some(record) => {
                info!(level = state.level(), high_score = state.high_score(), "level cleared");
                if record {
                    info!(high_score = state.high_score(), "new high score");
                }
                Ok(state)
            }
            None => {
                info!(high_score = state.high_score(), "sequence mismatch, soft reset to level 1");
                Err(DomainError::sequence_mismatch(state))
            }
        }
    }
}
