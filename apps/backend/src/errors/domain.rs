//! Domain-level error type used across services and stores.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::state::GameState;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Submission missing, not a list, empty, or containing unknown colors
    InvalidInput(String),
    /// Submission length differs from the current level
    LengthMismatch { expected: u32 },
    /// Submission did not match; carries the state after the soft reset
    SequenceMismatch { reset: GameState },
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidInput(d) => write!(f, "invalid input: {d}"),
            DomainError::LengthMismatch { expected } => {
                write!(f, "length mismatch: expected {expected} items")
            }
            DomainError::SequenceMismatch { reset } => {
                write!(f, "sequence mismatch: reset to level {}", reset.level())
            }
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }
    pub fn length_mismatch(expected: u32) -> Self {
        Self::LengthMismatch { expected }
    }
    pub fn sequence_mismatch(reset: GameState) -> Self {
        Self::SequenceMismatch { reset }
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// True for the three failures a player can cause by submitting a sequence.
    pub fn is_submission_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidInput(_)
                | DomainError::LengthMismatch { .. }
                | DomainError::SequenceMismatch { .. }
        )
    }
}
