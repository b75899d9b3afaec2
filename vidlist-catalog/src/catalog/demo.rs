//! Demo catalog for development without an API key.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::VideoCatalog;
use crate::errors::PlaylistError;
use crate::types::{
    PlaylistEntry, PlaylistInfo, PlaylistItemsPage, Thumbnail, ThumbnailSet, VideoDetail,
};

/// Canned single-page catalog so the full resolve pipeline can be exercised
/// without external API calls.
///
/// Any playlist id resolves to the same three-video demo playlist.
#[derive(Debug, Default)]
pub struct DemoCatalog;

impl DemoCatalog {
    /// Creates a demo catalog.
    pub fn new() -> Self {
        Self
    }

    fn demo_video(&self, id: &str, title: &str, duration: &str) -> VideoDetail {
        VideoDetail {
            id: id.to_string(),
            title: title.to_string(),
            thumbnails: ThumbnailSet {
                default: Some(Thumbnail {
                    url: format!("https://i.ytimg.com/vi/{id}/default.jpg"),
                }),
                medium: Some(Thumbnail {
                    url: format!("https://i.ytimg.com/vi/{id}/mqdefault.jpg"),
                }),
            },
            published_at: Utc
                .with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
                .single()
                .unwrap_or_default(),
            duration: duration.to_string(),
        }
    }
}

#[async_trait]
impl VideoCatalog for DemoCatalog {
    async fn playlist_by_id(
        &self,
        _playlist_id: &str,
    ) -> Result<Option<PlaylistInfo>, PlaylistError> {
        Ok(Some(PlaylistInfo {
            title: "Demo Playlist".to_string(),
        }))
    }

    async fn playlist_items_page(
        &self,
        _playlist_id: &str,
        _page_size: u32,
        _page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, PlaylistError> {
        Ok(PlaylistItemsPage {
            entries: ["demo-one", "demo-two", "demo-three"]
                .into_iter()
                .map(|id| PlaylistEntry {
                    video_id: Some(id.to_string()),
                })
                .collect(),
            next_page_token: None,
        })
    }

    async fn videos_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>, PlaylistError> {
        Ok(video_ids
            .iter()
            .map(|id| self.demo_video(id, &format!("Demo Video {id}"), "PT3M20S"))
            .collect())
    }
}
