use actix_web::HttpResponse;

use crate::protocol::game_state::{NotFoundBody, NOT_FOUND_MESSAGE};

/// 404 for any method/path the service does not serve.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundBody {
        error: NOT_FOUND_MESSAGE.to_string(),
    })
}
