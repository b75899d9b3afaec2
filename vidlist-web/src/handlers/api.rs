//! API handler for playlist resolution.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use tracing::warn;
use vidlist_catalog::PlaylistError;

use crate::server::AppState;

/// Resolve a playlist and return it as JSON.
pub async fn api_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    match state.aggregator.resolve_playlist(&playlist_id).await {
        Ok(result) => (StatusCode::OK, Json(json!(result))),
        Err(err) => {
            if matches!(err, PlaylistError::CatalogFailure { .. }) {
                warn!(%playlist_id, error = %err, "playlist resolution failed");
            }
            error_response(&err)
        }
    }
}

/// Answer requests that omit the playlist id entirely.
pub async fn api_playlist_missing() -> (StatusCode, Json<Value>) {
    error_response(&PlaylistError::MissingPlaylistId)
}

/// Map each error kind to its HTTP status and user-facing message, keeping
/// the raw upstream message in `details` for catalog failures.
fn error_response(err: &PlaylistError) -> (StatusCode, Json<Value>) {
    match err {
        PlaylistError::MissingPlaylistId => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Playlist ID is required"})),
        ),
        PlaylistError::PlaylistNotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Playlist not found."})),
        ),
        PlaylistError::CatalogFailure { reason } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to fetch data from YouTube API.",
                "details": reason,
            })),
        ),
    }
}
