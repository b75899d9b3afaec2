//! Vidlist Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves the playlist resolution API consumed by the static frontend and
//! external clients.

pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, router, run_server};
