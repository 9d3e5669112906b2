use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database};
use tracing::info;

use filmorate::config::FilmorateConfig;
use filmorate::infra::bootstrap::{bootstrap_schema, load_catalog};
use filmorate::router::build_router;
use filmorate::state::AppState;
use filmorate_core::config::Config;
use filmorate_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = FilmorateConfig::from_env().expect("failed to read configuration");

    let mut options = ConnectOptions::new(&config.database_url);
    options
        .max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("failed to connect to database");

    bootstrap_schema(&db)
        .await
        .expect("failed to bootstrap database schema");
    let catalog = load_catalog(&db)
        .await
        .expect("failed to load reference data");

    let state = AppState {
        db,
        catalog: Arc::new(catalog),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.filmorate_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("filmorate service listening on {http_addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
