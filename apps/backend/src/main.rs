use actix_web::{web, App, HttpServer};
use backend::config::ServerConfig;
use backend::infra::state::build_state;
use backend::middleware::{PermissiveCors, RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_seed(config.rng_seed).build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        workers = config.workers,
        seeded = config.rng_seed.is_some(),
        "starting Simon backend"
    );

    // One AppState for all workers so they share the single game
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(PermissiveCors)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
