//! Error types for playlist resolution.

use thiserror::Error;

/// Errors that can occur while resolving a playlist.
///
/// All variants are terminal for the current request; nothing is retried
/// internally. The web layer maps each variant to an HTTP status.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Caller supplied an empty or missing playlist identifier.
    #[error("Playlist ID is required")]
    MissingPlaylistId,

    /// The catalog has no playlist with the given identifier.
    #[error("Playlist not found: '{playlist_id}'")]
    PlaylistNotFound {
        /// The identifier that matched nothing
        playlist_id: String,
    },

    /// A catalog call failed: transport, auth, quota or a malformed response.
    #[error("Catalog request failed: {reason}")]
    CatalogFailure {
        /// The upstream failure message, preserved for diagnosis
        reason: String,
    },
}
