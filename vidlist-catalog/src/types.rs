//! Data types for playlist resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single video in the resolved playlist, serialized camelCase for the
/// frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Catalog video identifier
    pub id: String,
    /// Video title
    pub title: String,
    /// Thumbnail URL, medium variant preferred over default
    pub thumbnail: String,
    /// Publication timestamp
    pub published_at: DateTime<Utc>,
    /// ISO-8601 duration, e.g. "PT4M13S"
    pub duration: String,
}

/// The resolved playlist returned to the caller.
///
/// `videos` holds only the members whose detail records were still available
/// at fetch time, so `videos.len() <= total_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResult {
    /// Playlist title
    pub playlist_title: String,
    /// Number of member video ids collected, before dropping unavailable ones
    pub total_count: usize,
    /// Member videos in playlist order
    pub videos: Vec<VideoRecord>,
}

/// Playlist-level metadata from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistInfo {
    /// Playlist title
    pub title: String,
}

/// One membership entry from a paged playlist-items listing.
///
/// `video_id` is absent for entries whose underlying video is deleted or
/// private; such entries are skipped, not treated as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    /// Identifier of the underlying video, when resolvable
    pub video_id: Option<String>,
}

/// One page of a playlist membership enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistItemsPage {
    /// Membership entries in playlist order
    pub entries: Vec<PlaylistEntry>,
    /// Continuation cursor; `None` means this was the last page
    pub next_page_token: Option<String>,
}

/// Per-video metadata from a batched detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDetail {
    /// Catalog video identifier
    pub id: String,
    /// Video title
    pub title: String,
    /// Available thumbnail variants
    pub thumbnails: ThumbnailSet,
    /// Publication timestamp
    pub published_at: DateTime<Utc>,
    /// ISO-8601 duration
    pub duration: String,
}

/// Thumbnail variants the catalog may supply for a video.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThumbnailSet {
    /// Default-resolution thumbnail
    pub default: Option<Thumbnail>,
    /// Medium-resolution thumbnail
    pub medium: Option<Thumbnail>,
}

/// A single thumbnail variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    /// Image URL
    pub url: String,
}

impl ThumbnailSet {
    /// Pick the preferred thumbnail URL: medium, then default, then empty.
    pub fn preferred_url(&self) -> String {
        self.medium
            .as_ref()
            .or(self.default.as_ref())
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }
}

impl From<VideoDetail> for VideoRecord {
    fn from(detail: VideoDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            thumbnail: detail.thumbnails.preferred_url(),
            published_at: detail.published_at,
            duration: detail.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(url: &str) -> Thumbnail {
        Thumbnail {
            url: url.to_string(),
        }
    }

    #[test]
    fn preferred_url_picks_medium_over_default() {
        let set = ThumbnailSet {
            default: Some(thumb("https://i.ytimg.com/vi/a/default.jpg")),
            medium: Some(thumb("https://i.ytimg.com/vi/a/mqdefault.jpg")),
        };
        assert_eq!(set.preferred_url(), "https://i.ytimg.com/vi/a/mqdefault.jpg");
    }

    #[test]
    fn preferred_url_falls_back_to_default() {
        let set = ThumbnailSet {
            default: Some(thumb("https://i.ytimg.com/vi/a/default.jpg")),
            medium: None,
        };
        assert_eq!(set.preferred_url(), "https://i.ytimg.com/vi/a/default.jpg");
    }

    #[test]
    fn preferred_url_degrades_to_empty() {
        assert_eq!(ThumbnailSet::default().preferred_url(), "");
    }

    #[test]
    fn playlist_result_serializes_camel_case() {
        let result = PlaylistResult {
            playlist_title: "Mix".to_string(),
            total_count: 1,
            videos: vec![VideoRecord {
                id: "abc".to_string(),
                title: "A Video".to_string(),
                thumbnail: "https://i.ytimg.com/vi/abc/mqdefault.jpg".to_string(),
                published_at: "2023-04-01T12:00:00Z".parse().unwrap(),
                duration: "PT4M13S".to_string(),
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["playlistTitle"], "Mix");
        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["videos"][0]["publishedAt"], "2023-04-01T12:00:00Z");
        assert_eq!(json["videos"][0]["duration"], "PT4M13S");
    }
}
