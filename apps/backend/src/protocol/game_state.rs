//! JSON wire shapes for the game-state routes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::color::Color;
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

pub const RESET_MESSAGE: &str = "Game reset successfully";
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";

/// `{level, sequence, highScore}` as seen by clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub level: u32,
    pub sequence: Vec<Color>,
    pub high_score: u32,
}

impl From<&GameState> for GameStateView {
    fn from(state: &GameState) -> Self {
        Self {
            level: state.level(),
            sequence: state.sequence().to_vec(),
            high_score: state.high_score(),
        }
    }
}

impl From<GameState> for GameStateView {
    fn from(state: GameState) -> Self {
        Self::from(&state)
    }
}

/// Body of `PUT /game-state`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub message: String,
    pub game_state: GameStateView,
}

/// Success body of `POST /game-state/sequence`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub game_state: GameStateView,
}

/// Error body for every 4xx/5xx the service produces.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_state: Option<GameStateView>,
}

/// Body for unknown routes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotFoundBody {
    pub error: String,
}

/// Request body of `POST /game-state/sequence`.
///
/// `sequence` is kept as raw JSON so that "missing", "not a list" and
/// "unknown color" all surface as `InvalidInput` rather than a parse failure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubmitSequenceRequest {
    #[serde(default)]
    pub sequence: Option<Value>,
}

impl SubmitSequenceRequest {
    pub fn colors(&self) -> Result<Vec<Color>, DomainError> {
        parse_submission(self.sequence.as_ref())
    }
}

/// Turn the raw `sequence` field into colors.
pub fn parse_submission(raw: Option<&Value>) -> Result<Vec<Color>, DomainError> {
    let items = match raw {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => {
            return Err(DomainError::invalid_input(
                "A non-empty sequence array is required.",
            ))
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.parse::<Color>(),
            other => Err(DomainError::invalid_input(format!(
                "Sequence items must be color names, got {other}."
            ))),
        })
        .collect()
}
