//! Mock catalog implementation for testing.

#[cfg(test)]
use std::collections::HashSet;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use chrono::{TimeZone, Utc};

#[cfg(test)]
use super::VideoCatalog;
#[cfg(test)]
use crate::errors::PlaylistError;
#[cfg(test)]
use crate::types::{
    PlaylistEntry, PlaylistInfo, PlaylistItemsPage, Thumbnail, ThumbnailSet, VideoDetail,
};

/// Mock catalog for testing.
///
/// Serves a configurable membership list in pages of the requested size and
/// fabricates detail records on demand, recording every page and batch
/// request so pagination and batching behavior can be asserted.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockCatalog {
    playlist: Option<PlaylistInfo>,
    member_ids: Vec<Option<String>>,
    unavailable: HashSet<String>,
    fail_details: bool,
    page_requests: Mutex<Vec<Option<String>>>,
    batch_requests: Mutex<Vec<Vec<String>>>,
}

#[cfg(test)]
impl MockCatalog {
    /// Creates a mock catalog with the given playlist title.
    pub fn with_playlist(title: &str) -> Self {
        Self {
            playlist: Some(PlaylistInfo {
                title: title.to_string(),
            }),
            ..Self::default()
        }
    }

    /// Creates a mock catalog that matches no playlist.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Appends membership entries with the given video ids.
    pub fn with_members<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.member_ids
            .extend(ids.into_iter().map(|id| Some(id.into())));
        self
    }

    /// Appends a membership entry without a resolvable video id.
    pub fn with_unresolvable_entry(mut self) -> Self {
        self.member_ids.push(None);
        self
    }

    /// Marks a video id as unavailable at detail-fetch time.
    pub fn with_unavailable(mut self, id: &str) -> Self {
        self.unavailable.insert(id.to_string());
        self
    }

    /// Makes every detail fetch fail with a catalog error.
    pub fn with_failing_details(mut self) -> Self {
        self.fail_details = true;
        self
    }

    /// Number of membership pages requested so far.
    ///
    /// # Panics
    /// Panics if the recording mutex was poisoned by another test thread.
    pub fn page_request_count(&self) -> usize {
        self.page_requests.lock().unwrap().len()
    }

    /// Sizes of the detail batches requested so far, in request order.
    ///
    /// # Panics
    /// Panics if the recording mutex was poisoned by another test thread.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batch_requests
            .lock()
            .unwrap()
            .iter()
            .map(Vec::len)
            .collect()
    }

    fn fabricate_detail(&self, id: &str) -> VideoDetail {
        VideoDetail {
            id: id.to_string(),
            title: format!("Video {id}"),
            thumbnails: ThumbnailSet {
                default: Some(Thumbnail {
                    url: format!("https://i.ytimg.com/vi/{id}/default.jpg"),
                }),
                medium: Some(Thumbnail {
                    url: format!("https://i.ytimg.com/vi/{id}/mqdefault.jpg"),
                }),
            },
            published_at: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            duration: "PT1M".to_string(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl VideoCatalog for MockCatalog {
    async fn playlist_by_id(
        &self,
        _playlist_id: &str,
    ) -> Result<Option<PlaylistInfo>, PlaylistError> {
        Ok(self.playlist.clone())
    }

    async fn playlist_items_page(
        &self,
        _playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, PlaylistError> {
        self.page_requests
            .lock()
            .unwrap()
            .push(page_token.map(str::to_string));

        let offset: usize = page_token.and_then(|t| t.parse().ok()).unwrap_or(0);
        let end = (offset + page_size as usize).min(self.member_ids.len());

        Ok(PlaylistItemsPage {
            entries: self.member_ids[offset..end]
                .iter()
                .map(|id| PlaylistEntry {
                    video_id: id.clone(),
                })
                .collect(),
            next_page_token: (end < self.member_ids.len()).then(|| end.to_string()),
        })
    }

    async fn videos_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>, PlaylistError> {
        self.batch_requests.lock().unwrap().push(video_ids.to_vec());

        if self.fail_details {
            return Err(PlaylistError::CatalogFailure {
                reason: "quotaExceeded".to_string(),
            });
        }

        // One record per distinct available id, deliberately in reverse
        // request order: callers must not rely on batch ordering.
        let mut seen = HashSet::new();
        Ok(video_ids
            .iter()
            .rev()
            .filter(|id| !self.unavailable.contains(*id) && seen.insert(id.to_string()))
            .map(|id| self.fabricate_detail(id))
            .collect())
    }
}
