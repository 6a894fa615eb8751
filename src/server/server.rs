use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{error, info};

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;

use super::docs::get_docs;
use super::enumerations::{get_genres, get_moods};
use super::envelope::Envelope;
use super::songs::{
    advanced_search, get_genre_songs, get_mood_songs, get_random_songs, get_songs, search,
};
use super::{handle_panic, log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub uptime: String,
    pub version: &'static str,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "OK",
        message: "NCS API Server is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn route_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Envelope::failure("Route not found").with_context("path", uri.path()),
    )
}

pub fn make_app(config: ServerConfig, catalog: GuardedCatalogProvider) -> Router {
    let state = ServerState::new(config, catalog);

    let api_routes: Router = Router::new()
        .route("/songs", get(get_songs))
        .route("/search", get(search))
        .route("/genre/{genre_name}", get(get_genre_songs))
        .route("/mood/{mood_name}", get(get_mood_songs))
        .route("/genres", get(get_genres))
        .route("/moods", get(get_moods))
        .route("/advanced-search", get(advanced_search))
        .route("/random", get(get_random_songs))
        .route("/docs", get(get_docs))
        .with_state(state.clone());

    let mut app: Router = Router::new()
        .route("/health", get(health))
        .with_state(state.clone())
        .nest("/api", api_routes)
        .fallback(route_not_found);

    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));
    app.layer(CatchPanicLayer::custom(handle_panic))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(config: ServerConfig, catalog: GuardedCatalogProvider) -> Result<()> {
    let address = config.socket_addr();
    let app = make_app(config, catalog);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;

    info!("Ready to serve at http://{}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
