//! Authoritative game state and its transitions.
//!
//! Every constructor and transition keeps `sequence.len() == level`, and no
//! transition lowers `high_score`.

use rand::Rng;

use super::color::Color;
use super::sequence::generate_with;
use crate::errors::domain::DomainError;

/// Current round, the sequence the player must reproduce, and the best level
/// cleared so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    level: u32,
    sequence: Vec<Color>,
    high_score: u32,
}

/// Result of applying a well-formed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progression {
    /// Sequence matched; the state has moved to the next level.
    Cleared(GameState),
    /// Sequence did not match; the state has been soft reset to level 1.
    Failed(GameState),
}

impl GameState {
    /// Fresh process-start state: level 1, high score 0.
    pub fn initial<R: Rng>(rng: &mut R) -> Self {
        Self {
            level: 1,
            sequence: generate_with(rng, 1),
            high_score: 0,
        }
    }

    /// Build a state from explicit parts, rejecting shapes that break the
    /// length invariant.
    pub fn from_parts(
        level: u32,
        sequence: Vec<Color>,
        high_score: u32,
    ) -> Result<Self, DomainError> {
        if level == 0 {
            return Err(DomainError::invalid_input("Level must be at least 1."));
        }
        if sequence.len() != level as usize {
            return Err(DomainError::invalid_input(format!(
                "Sequence length {} does not match level {level}.",
                sequence.len()
            )));
        }
        Ok(Self {
            level,
            sequence,
            high_score,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn sequence(&self) -> &[Color] {
        &self.sequence
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Back to level 1 with a new length-1 sequence; the high score survives.
    pub fn reset<R: Rng>(&self, rng: &mut R) -> Self {
        Self {
            level: 1,
            sequence: generate_with(rng, 1),
            high_score: self.high_score,
        }
    }

    /// Checks that run before any mutation: non-empty, then exact length.
    pub fn check_submission(&self, submitted: &[Color]) -> Result<(), DomainError> {
        if submitted.is_empty() {
            return Err(DomainError::invalid_input(
                "A non-empty sequence array is required.",
            ));
        }
        if submitted.len() != self.level as usize {
            return Err(DomainError::length_mismatch(self.level));
        }
        Ok(())
    }

    /// Validate `submitted` and compute the next state.
    ///
    /// Precondition failures come back as `Err` and leave `self` untouched.
    /// A well-formed but wrong submission is `Ok(Progression::Failed)`: the
    /// soft reset is a state change the caller still has to persist.
    pub fn apply_submission<R: Rng>(
        &self,
        submitted: &[Color],
        rng: &mut R,
    ) -> Result<Progression, DomainError> {
        self.check_submission(submitted)?;

        if submitted != self.sequence.as_slice() {
            return Ok(Progression::Failed(self.reset(rng)));
        }

        // Record is set at the level just cleared, not the next one.
        let high_score = self.high_score.max(self.level);
        let level = self.level + 1;
        Ok(Progression::Cleared(Self {
            level,
            sequence: generate_with(rng, level),
            high_score,
        }))
    }
}
