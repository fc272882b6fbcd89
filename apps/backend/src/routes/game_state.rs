//! Game-state HTTP routes.

use actix_web::{web, HttpResponse, Result};
use tracing::debug;

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::protocol::game_state::{
    GameStateView, ResetResponse, SubmitSequenceRequest, ValidateResponse, RESET_MESSAGE,
};
use crate::routes::fallback::not_found;
use crate::state::app_state::AppState;

/// PUT /game-state
///
/// Explicit reset: level 1, new sequence, high score kept. Can surface the
/// same 409 `OPTIMISTIC_LOCK` as a submission under write contention.
async fn reset_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let state = app_state.sequence_service().reset().await?;

    Ok(HttpResponse::Ok().json(ResetResponse {
        message: RESET_MESSAGE.to_string(),
        game_state: GameStateView::from(state),
    }))
}

/// GET /game-state
async fn get_game_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let state = app_state.sequence_service().state().await?;
    Ok(HttpResponse::Ok().json(GameStateView::from(state)))
}

/// POST /game-state/sequence
///
/// Validates the submitted sequence. A wrong sequence is a 400 whose body
/// also carries the soft-reset state so the client can redraw.
///
/// Bodies over `MAX_BODY_BYTES` are a 413. A write that keeps losing the
/// store's compare-and-swap is a 409 `OPTIMISTIC_LOCK`; the client may retry.
async fn submit_sequence(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SubmitSequenceRequest>,
) -> Result<HttpResponse, AppError> {
    let submitted = body.colors()?;
    debug!(len = submitted.len(), "sequence submitted");

    let state = app_state.sequence_service().validate(&submitted).await?;

    Ok(HttpResponse::Ok().json(ValidateResponse {
        game_state: GameStateView::from(state),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/game-state")
            .route(web::put().to(reset_game))
            .route(web::get().to(get_game_state))
            .default_service(web::to(not_found)),
    );
    cfg.service(
        web::resource("/game-state/sequence")
            .route(web::post().to(submit_sequence))
            .default_service(web::to(not_found)),
    );
}
