use actix_web::web;

pub mod fallback;
pub mod game_state;
pub mod health;

/// Register every route plus the JSON 404 fallback.
///
/// Game routes are served both at the root and under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/api/v1").configure(game_state::configure_routes));
    cfg.configure(game_state::configure_routes);
    cfg.default_service(web::to(fallback::not_found));
}
