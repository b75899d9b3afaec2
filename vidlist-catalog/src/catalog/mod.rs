//! Catalog provider implementations.

use async_trait::async_trait;

use crate::errors::PlaylistError;
use crate::types::{PlaylistInfo, PlaylistItemsPage, VideoDetail};

pub mod demo;
pub mod mock;
pub mod youtube;

pub use demo::DemoCatalog;
#[cfg(test)]
pub use mock::MockCatalog;
pub use youtube::YouTubeCatalog;

/// Trait for video catalog backends.
///
/// Implementations expose the three capabilities the aggregator depends on
/// (real YouTube Data API, demo data, mock catalogs for testing).
#[async_trait]
pub trait VideoCatalog: Send + Sync + std::fmt::Debug {
    /// Fetch playlist-level metadata by id, `None` when no playlist matches.
    ///
    /// # Errors
    /// - `PlaylistError::CatalogFailure` - The catalog call failed
    async fn playlist_by_id(
        &self,
        playlist_id: &str,
    ) -> Result<Option<PlaylistInfo>, PlaylistError>;

    /// Fetch one page of playlist membership.
    ///
    /// `page_token` of `None` requests the first page; a returned
    /// `next_page_token` of `None` means the enumeration is complete.
    ///
    /// # Errors
    /// - `PlaylistError::CatalogFailure` - The catalog call failed
    async fn playlist_items_page(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, PlaylistError>;

    /// Fetch detail records for a batch of at most 50 video ids.
    ///
    /// Unavailable videos are simply absent from the result, not errors.
    ///
    /// # Errors
    /// - `PlaylistError::CatalogFailure` - The catalog call failed
    async fn videos_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>, PlaylistError>;
}
