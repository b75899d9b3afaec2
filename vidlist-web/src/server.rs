//! HTTP server wiring for the playlist API.
//!
//! One JSON endpoint plus the static frontend; all playlist logic lives in
//! the aggregator, this layer only translates HTTP to and from it.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use vidlist_catalog::PlaylistAggregator;

use crate::handlers::{api_playlist, api_playlist_missing};

/// Shared per-request state.
#[derive(Clone)]
pub struct AppState {
    /// The playlist resolution pipeline
    pub aggregator: PlaylistAggregator,
}

/// Builds the application router over the given state.
///
/// Split from [`run_server`] so tests can drive the routes directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/playlist/{playlist_id}", get(api_playlist))
        // A request with no id at all still answers 400 rather than 404.
        .route("/api/playlist", get(api_playlist_missing))
        .route("/api/playlist/", get(api_playlist_missing))
        .fallback_service(ServeDir::new("public"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds and serves the playlist API until the process exits.
///
/// # Errors
/// Returns an error if the listen address cannot be bound.
pub async fn run_server(
    aggregator: PlaylistAggregator,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(AppState { aggregator });

    println!("Vidlist server running on http://{host}:{port}");
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
