mod model;
mod server;

use std::{sync::Arc, time::Duration};

use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderValue, Method, StatusCode,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    scheduler::leaderboard_rebuild,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let registry = Arc::new(startup::build_leaderboard_registry(&config)?);
    let store = startup::hydrate_leaderboards(&db, &registry, &config).await?;

    let mut scheduler = leaderboard_rebuild::start_scheduler(
        db.clone(),
        registry.clone(),
        store.clone(),
        &config.leaderboard_rebuild_cron,
    )
    .await?;

    let cors = CorsLayer::new()
        .allow_origin(config.app_url.parse::<HeaderValue>().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: "APP_URL".to_string(),
                value: config.app_url.clone(),
            }
        })?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_credentials(true);

    let state = AppState::new(db, registry, store, config.default_team_size);
    let app = server::router::router()
        .with_state(state)
        .layer(session)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await?;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
