//! Vidlist Catalog - Playlist resolution core

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Resolves a playlist identifier into an ordered video listing by paginating
//! the catalog's membership endpoint, batch-fetching per-video metadata and
//! reassembling the results in playlist order.

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod types;

// Re-export main types
pub use aggregator::PlaylistAggregator;
pub use catalog::{DemoCatalog, VideoCatalog, YouTubeCatalog};
pub use config::{CatalogConfig, ConfigError};
pub use errors::PlaylistError;
pub use types::{PlaylistResult, VideoRecord};

/// Convenience type alias for Results with PlaylistError.
pub type Result<T> = std::result::Result<T, PlaylistError>;
