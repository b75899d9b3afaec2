//! YouTube Data API v3 catalog provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::VideoCatalog;
use crate::config::CatalogConfig;
use crate::errors::PlaylistError;
use crate::types::{
    PlaylistEntry, PlaylistInfo, PlaylistItemsPage, Thumbnail, ThumbnailSet, VideoDetail,
};

/// Catalog provider backed by the YouTube Data API v3.
#[derive(Debug, Clone)]
pub struct YouTubeCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

/// Response from `playlists.list`.
#[derive(Debug, Deserialize)]
struct PlaylistListResponse {
    #[serde(default)]
    items: Vec<PlaylistResource>,
}

#[derive(Debug, Deserialize)]
struct PlaylistResource {
    snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
struct PlaylistSnippet {
    title: String,
}

/// Response from `playlistItems.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItemResource>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemResource {
    snippet: PlaylistItemSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemSnippet {
    resource_id: Option<ItemResourceId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemResourceId {
    video_id: Option<String>,
}

/// Response from `videos.list`.
#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoResource {
    id: String,
    snippet: VideoSnippet,
    content_details: VideoContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    title: String,
    published_at: DateTime<Utc>,
    #[serde(default)]
    thumbnails: ThumbnailsResource,
}

#[derive(Debug, Default, Deserialize)]
struct ThumbnailsResource {
    default: Option<ThumbnailResource>,
    medium: Option<ThumbnailResource>,
}

#[derive(Debug, Deserialize)]
struct ThumbnailResource {
    url: String,
}

#[derive(Debug, Deserialize)]
struct VideoContentDetails {
    duration: String,
}

/// Error envelope the API returns on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

impl YouTubeCatalog {
    /// Creates a YouTube catalog provider from the given configuration.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .timeout(self.config.request_timeout)
            .header(reqwest::header::USER_AGENT, self.config.user_agent)
    }

    /// Issue a request and decode the body, surfacing the API error envelope
    /// message on non-2xx responses.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, PlaylistError> {
        let response =
            self.get(url)
                .send()
                .await
                .map_err(|e| PlaylistError::CatalogFailure {
                    reason: format!("HTTP request failed: {e}"),
                })?;

        let status = response.status();
        if !status.is_success() {
            let envelope: ApiErrorEnvelope = response.json().await.unwrap_or_default();
            let reason = envelope
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(PlaylistError::CatalogFailure { reason });
        }

        response
            .json()
            .await
            .map_err(|e| PlaylistError::CatalogFailure {
                reason: format!("JSON parsing failed: {e}"),
            })
    }
}

#[async_trait]
impl VideoCatalog for YouTubeCatalog {
    async fn playlist_by_id(
        &self,
        playlist_id: &str,
    ) -> Result<Option<PlaylistInfo>, PlaylistError> {
        let url = format!(
            "{}/playlists?part=snippet&id={}&key={}",
            self.config.api_base,
            urlencoding::encode(playlist_id),
            urlencoding::encode(&self.config.api_key),
        );

        let response: PlaylistListResponse = self.fetch_json(&url).await?;
        Ok(response
            .items
            .into_iter()
            .next()
            .map(|item| PlaylistInfo {
                title: item.snippet.title,
            }))
    }

    async fn playlist_items_page(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, PlaylistError> {
        let mut url = format!(
            "{}/playlistItems?part=snippet&playlistId={}&maxResults={}&key={}",
            self.config.api_base,
            urlencoding::encode(playlist_id),
            page_size,
            urlencoding::encode(&self.config.api_key),
        );
        if let Some(token) = page_token {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
        }

        let response: PlaylistItemsResponse = self.fetch_json(&url).await?;
        Ok(PlaylistItemsPage {
            entries: response
                .items
                .into_iter()
                .map(|item| PlaylistEntry {
                    video_id: item.snippet.resource_id.and_then(|r| r.video_id),
                })
                .collect(),
            next_page_token: response.next_page_token,
        })
    }

    async fn videos_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoDetail>, PlaylistError> {
        let url = format!(
            "{}/videos?part=snippet,contentDetails&id={}&key={}",
            self.config.api_base,
            urlencoding::encode(&video_ids.join(",")),
            urlencoding::encode(&self.config.api_key),
        );

        let response: VideoListResponse = self.fetch_json(&url).await?;
        Ok(response
            .items
            .into_iter()
            .map(|item| VideoDetail {
                id: item.id,
                title: item.snippet.title,
                thumbnails: ThumbnailSet {
                    default: item.snippet.thumbnails.default.map(|t| Thumbnail { url: t.url }),
                    medium: item.snippet.thumbnails.medium.map(|t| Thumbnail { url: t.url }),
                },
                published_at: item.snippet.published_at,
                duration: item.content_details.duration,
            })
            .collect())
    }
}
