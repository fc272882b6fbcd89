use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::state::GameState;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::errors::ErrorCode;
use crate::protocol::game_state::{ErrorBody, GameStateView};
use crate::trace_ctx;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {detail}")]
    InvalidInput { detail: String },
    #[error("Sequence must be exactly {expected} items long.")]
    LengthMismatch { expected: u32 },
    #[error("Incorrect sequence. Restarting at level 1.")]
    SequenceMismatch { reset: GameState },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Request body exceeds {limit} bytes.")]
    PayloadTooLarge { limit: usize },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput { .. } => ErrorCode::InvalidInput,
            AppError::LengthMismatch { .. } => ErrorCode::LengthMismatch,
            AppError::SequenceMismatch { .. } => ErrorCode::SequenceMismatch,
            AppError::BadRequest { code, .. } => *code,
            AppError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            AppError::Conflict { code, .. } => *code,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Human-readable message placed in the response body
    pub fn message(&self) -> String {
        match self {
            AppError::InvalidInput { detail } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Internal { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
            AppError::LengthMismatch { .. }
            | AppError::SequenceMismatch { .. }
            | AppError::PayloadTooLarge { .. } => self.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::LengthMismatch { .. } => StatusCode::BAD_REQUEST,
            AppError::SequenceMismatch { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn game_state(&self) -> Option<GameStateView> {
        match self {
            AppError::SequenceMismatch { reset } => Some(GameStateView::from(reset)),
            _ => None,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(detail) => AppError::InvalidInput { detail },
            DomainError::LengthMismatch { expected } => AppError::LengthMismatch { expected },
            DomainError::SequenceMismatch { reset } => AppError::SequenceMismatch { reset },
            DomainError::Conflict(ConflictKind::OptimisticLock, detail) => {
                AppError::conflict(ErrorCode::OptimisticLock, detail)
            }
            DomainError::Conflict(_, detail) => AppError::conflict(ErrorCode::Conflict, detail),
            DomainError::Infra(InfraErrorKind::StoreUnavailable, detail) => {
                AppError::internal(ErrorCode::StoreUnavailable, detail)
            }
            DomainError::Infra(InfraErrorKind::DataCorruption, detail) => {
                AppError::internal(ErrorCode::DataCorruption, detail)
            }
            DomainError::Infra(_, detail) => AppError::internal(ErrorCode::Internal, detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        let body = ErrorBody {
            message: self.message(),
            code: self.code().as_str().to_string(),
            game_state: self.game_state(),
        };

        HttpResponse::build(status)
            .insert_header(("x-trace-id", trace_id))
            .json(body)
    }
}
