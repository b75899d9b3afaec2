//! HTTP request handlers.

pub mod api;

// Re-export handler functions
pub use api::{api_playlist, api_playlist_missing};
