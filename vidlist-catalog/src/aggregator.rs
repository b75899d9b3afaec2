//! Playlist aggregation pipeline.
//!
//! Resolves a playlist id in four steps: playlist lookup, paged membership
//! enumeration, chunked concurrent detail fetches, then reassembly of the
//! unordered detail pool back into membership order.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future;
use tracing::debug;

use crate::catalog::VideoCatalog;
use crate::config::CatalogConfig;
use crate::errors::PlaylistError;
use crate::types::{PlaylistResult, VideoRecord};
use crate::{Result, YouTubeCatalog};

/// Page size for membership enumeration, the catalog's maximum.
const PLAYLIST_PAGE_SIZE: u32 = 50;

/// Maximum video ids per batched detail fetch, the catalog's maximum.
const VIDEO_DETAIL_BATCH: usize = 50;

/// Resolves playlist ids into ordered video listings.
///
/// Each invocation is an independent request/response pipeline; the only
/// shared state is the read-only catalog handle.
#[derive(Debug, Clone)]
pub struct PlaylistAggregator {
    catalog: Arc<dyn VideoCatalog>,
}

impl PlaylistAggregator {
    /// Creates an aggregator over the given catalog backend.
    pub fn new(catalog: Arc<dyn VideoCatalog>) -> Self {
        Self { catalog }
    }

    /// Creates an aggregator backed by the YouTube Data API.
    pub fn from_config(config: CatalogConfig) -> Self {
        Self::new(Arc::new(YouTubeCatalog::new(config)))
    }

    /// Resolve a playlist into its title and ordered member videos.
    ///
    /// Members whose videos became unavailable between the membership listing
    /// and the detail fetch are dropped from `videos` but still counted in
    /// `total_count`.
    ///
    /// # Errors
    /// - `PlaylistError::MissingPlaylistId` - Empty playlist id, no remote call made
    /// - `PlaylistError::PlaylistNotFound` - No playlist matches the id
    /// - `PlaylistError::CatalogFailure` - Any catalog call failed; no partial result
    pub async fn resolve_playlist(&self, playlist_id: &str) -> Result<PlaylistResult> {
        if playlist_id.trim().is_empty() {
            return Err(PlaylistError::MissingPlaylistId);
        }

        let info = self
            .catalog
            .playlist_by_id(playlist_id)
            .await?
            .ok_or_else(|| PlaylistError::PlaylistNotFound {
                playlist_id: playlist_id.to_string(),
            })?;

        let video_ids = self.collect_member_ids(playlist_id).await?;
        debug!(
            playlist_id,
            member_count = video_ids.len(),
            "membership enumeration complete"
        );

        if video_ids.is_empty() {
            return Ok(PlaylistResult {
                playlist_title: info.title,
                total_count: 0,
                videos: Vec::new(),
            });
        }

        let pool = self.fetch_detail_pool(&video_ids).await?;
        debug!(
            playlist_id,
            detail_count = pool.len(),
            "detail fetch complete"
        );

        // Ordered traversal of the membership sequence with keyed lookup:
        // restores playlist order, preserves duplicates and drops ids whose
        // video disappeared between listing and detail fetch.
        let videos: Vec<VideoRecord> = video_ids
            .iter()
            .filter_map(|id| pool.get(id).cloned())
            .collect();

        Ok(PlaylistResult {
            playlist_title: info.title,
            total_count: video_ids.len(),
            videos,
        })
    }

    /// Enumerate the full membership in encounter order, following the
    /// continuation cursor until the catalog reports no further pages.
    async fn collect_member_ids(&self, playlist_id: &str) -> Result<Vec<String>> {
        let mut video_ids = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .catalog
                .playlist_items_page(playlist_id, PLAYLIST_PAGE_SIZE, page_token.as_deref())
                .await?;

            // Entries without a resolvable video id (deleted or private
            // videos) are skipped, not errors.
            video_ids.extend(page.entries.into_iter().filter_map(|e| e.video_id));

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        Ok(video_ids)
    }

    /// Fetch detail records for all ids in chunks of at most 50, requested
    /// concurrently. The chunks are disjoint reads and ordering is restored
    /// afterwards from the membership sequence, so response order is
    /// irrelevant; any chunk failure fails the whole fetch.
    async fn fetch_detail_pool(&self, video_ids: &[String]) -> Result<HashMap<String, VideoRecord>> {
        let fetches = video_ids
            .chunks(VIDEO_DETAIL_BATCH)
            .map(|chunk| self.catalog.videos_by_ids(chunk));
        let batches = future::try_join_all(fetches).await?;

        Ok(batches
            .into_iter()
            .flatten()
            .map(|detail| (detail.id.clone(), VideoRecord::from(detail)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;

    fn aggregator_over(mock: MockCatalog) -> (PlaylistAggregator, Arc<MockCatalog>) {
        let catalog = Arc::new(mock);
        (PlaylistAggregator::new(catalog.clone()), catalog)
    }

    fn member_ids(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("vid{i:03}")).collect()
    }

    #[tokio::test]
    async fn resolves_playlist_in_membership_order() {
        let (aggregator, _) =
            aggregator_over(MockCatalog::with_playlist("Mix").with_members(["a", "b", "c"]));

        let result = aggregator.resolve_playlist("PL123").await.unwrap();

        assert_eq!(result.playlist_title, "Mix");
        assert_eq!(result.total_count, 3);
        // The mock returns detail batches in reverse order; output must
        // follow membership order regardless.
        let ids: Vec<&str> = result.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(result.videos[0].title, "Video a");
        assert_eq!(
            result.videos[0].thumbnail,
            "https://i.ytimg.com/vi/a/mqdefault.jpg"
        );
    }

    #[tokio::test]
    async fn paginates_membership_beyond_page_size() {
        let (aggregator, catalog) =
            aggregator_over(MockCatalog::with_playlist("Long").with_members(member_ids(120)));

        let result = aggregator.resolve_playlist("PL123").await.unwrap();

        // 120 members served 50 at a time means exactly three page requests.
        assert_eq!(catalog.page_request_count(), 3);
        assert_eq!(result.total_count, 120);
        let ids: Vec<&str> = result.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, member_ids(120));
    }

    #[tokio::test]
    async fn batches_detail_fetches_in_chunks_of_fifty() {
        let (aggregator, catalog) =
            aggregator_over(MockCatalog::with_playlist("Long").with_members(member_ids(120)));

        aggregator.resolve_playlist("PL123").await.unwrap();

        assert_eq!(catalog.batch_sizes(), vec![50, 50, 20]);
    }

    #[tokio::test]
    async fn preserves_duplicate_members() {
        let (aggregator, _) =
            aggregator_over(MockCatalog::with_playlist("Loop").with_members(["a", "b", "a"]));

        let result = aggregator.resolve_playlist("PL123").await.unwrap();

        assert_eq!(result.total_count, 3);
        let ids: Vec<&str> = result.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "a"]);
    }

    #[tokio::test]
    async fn drops_unavailable_videos_but_counts_them() {
        let (aggregator, _) = aggregator_over(
            MockCatalog::with_playlist("Mix")
                .with_members(["a", "b", "c"])
                .with_unavailable("b"),
        );

        let result = aggregator.resolve_playlist("PL123").await.unwrap();

        assert_eq!(result.total_count, 3);
        let ids: Vec<&str> = result.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(result.videos.len() <= result.total_count);
    }

    #[tokio::test]
    async fn skips_membership_entries_without_video_id() {
        let (aggregator, _) = aggregator_over(
            MockCatalog::with_playlist("Mix")
                .with_members(["a"])
                .with_unresolvable_entry()
                .with_members(["b"]),
        );

        let result = aggregator.resolve_playlist("PL123").await.unwrap();

        assert_eq!(result.total_count, 2);
        let ids: Vec<&str> = result.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn empty_playlist_short_circuits_without_detail_fetch() {
        let (aggregator, catalog) = aggregator_over(MockCatalog::with_playlist("Empty"));

        let result = aggregator.resolve_playlist("PL123").await.unwrap();

        assert_eq!(result.total_count, 0);
        assert!(result.videos.is_empty());
        assert_eq!(catalog.batch_sizes(), Vec::<usize>::new());
    }

    #[tokio::test]
    async fn unknown_playlist_is_not_found_before_enumeration() {
        let (aggregator, catalog) = aggregator_over(MockCatalog::not_found());

        let err = aggregator.resolve_playlist("PLmissing").await.unwrap_err();

        assert!(matches!(
            err,
            PlaylistError::PlaylistNotFound { ref playlist_id } if playlist_id == "PLmissing"
        ));
        assert_eq!(catalog.page_request_count(), 0);
        assert_eq!(catalog.batch_sizes(), Vec::<usize>::new());
    }

    #[tokio::test]
    async fn empty_id_fails_validation_without_remote_calls() {
        let (aggregator, catalog) =
            aggregator_over(MockCatalog::with_playlist("Mix").with_members(["a"]));

        for input in ["", "   "] {
            let err = aggregator.resolve_playlist(input).await.unwrap_err();
            assert!(matches!(err, PlaylistError::MissingPlaylistId));
        }
        assert_eq!(catalog.page_request_count(), 0);
        assert_eq!(catalog.batch_sizes(), Vec::<usize>::new());
    }

    #[tokio::test]
    async fn detail_failure_fails_the_whole_request() {
        let (aggregator, _) = aggregator_over(
            MockCatalog::with_playlist("Mix")
                .with_members(["a", "b"])
                .with_failing_details(),
        );

        let err = aggregator.resolve_playlist("PL123").await.unwrap_err();

        assert!(matches!(
            err,
            PlaylistError::CatalogFailure { ref reason } if reason == "quotaExceeded"
        ));
    }

    #[tokio::test]
    async fn resolution_is_idempotent_over_unchanged_catalog() {
        let (aggregator, _) = aggregator_over(
            MockCatalog::with_playlist("Mix")
                .with_members(["a", "b", "c"])
                .with_unavailable("c"),
        );

        let first = aggregator.resolve_playlist("PL123").await.unwrap();
        let second = aggregator.resolve_playlist("PL123").await.unwrap();

        assert_eq!(first, second);
    }
}
