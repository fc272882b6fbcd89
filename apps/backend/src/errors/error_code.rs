//! Error codes for the sequence service API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the sequence service API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Submission Validation
    /// Submitted sequence missing, not a list, empty, or with unknown colors
    InvalidInput,
    /// Submitted sequence length differs from the current level
    LengthMismatch,
    /// Submitted sequence differs from the expected sequence
    SequenceMismatch,
    /// Request body could not be read or parsed
    BadRequest,
    /// Request body over the extractor's size limit
    PayloadTooLarge,

    // Conflicts
    /// Optimistic lock conflict on the game state store
    OptimisticLock,
    /// Generic conflict
    Conflict,

    // System Errors
    /// Game state store unavailable
    StoreUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::LengthMismatch => "LENGTH_MISMATCH",
            Self::SequenceMismatch => "SEQUENCE_MISMATCH",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
