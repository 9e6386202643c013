use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use marquee_model::{MediaStatus, VideoID};
use serde::{Deserialize, Serialize};

use crate::domain::video::{
    AudioVideoMedia, ImageMedia, Video, VideoRepository,
};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioVideoMediaOutput {
    pub id: String,
    pub checksum: String,
    pub name: String,
    pub raw_location: String,
    pub encoded_location: String,
    pub status: MediaStatus,
}

impl From<&AudioVideoMedia> for AudioVideoMediaOutput {
    fn from(media: &AudioVideoMedia) -> Self {
        Self {
            id: media.id().to_string(),
            checksum: media.checksum().to_string(),
            name: media.name().to_string(),
            raw_location: media.raw_location().to_string(),
            encoded_location: media.encoded_location().to_string(),
            status: media.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMediaOutput {
    pub id: String,
    pub checksum: String,
    pub name: String,
    pub location: String,
}

impl From<&ImageMedia> for ImageMediaOutput {
    fn from(media: &ImageMedia) -> Self {
        Self {
            id: media.id().to_string(),
            checksum: media.checksum().to_string(),
            name: media.name().to_string(),
            location: media.location().to_string(),
        }
    }
}

/// Read model of a video. Reference ids are sorted for stable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoOutput {
    pub id: VideoID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub launched_at: Option<i32>,
    pub duration: Option<f64>,
    pub opened: Option<bool>,
    pub published: Option<bool>,
    pub rating: Option<String>,
    pub categories: BTreeSet<String>,
    pub genres: BTreeSet<String>,
    pub cast_members: BTreeSet<String>,
    pub video: Option<AudioVideoMediaOutput>,
    pub trailer: Option<AudioVideoMediaOutput>,
    pub banner: Option<ImageMediaOutput>,
    pub thumbnail: Option<ImageMediaOutput>,
    pub thumbnail_half: Option<ImageMediaOutput>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Video> for VideoOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().clone(),
            title: video.title().map(str::to_string),
            description: video.description().map(str::to_string),
            launched_at: video.launched_at(),
            duration: video.duration(),
            opened: video.opened(),
            published: video.published(),
            rating: video.rating().map(|r| r.label().to_string()),
            categories: video.categories().iter().map(|id| id.to_string()).collect(),
            genres: video.genres().iter().map(|id| id.to_string()).collect(),
            cast_members: video
                .cast_members()
                .iter()
                .map(|id| id.to_string())
                .collect(),
            video: video.video().map(Into::into),
            trailer: video.trailer().map(Into::into),
            banner: video.banner().map(Into::into),
            thumbnail: video.thumbnail().map(Into::into),
            thumbnail_half: video.thumbnail_half().map(Into::into),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
        }
    }
}

#[async_trait]
pub trait GetVideoByIdUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<VideoOutput>;
}

pub struct DefaultGetVideoByIdUseCase {
    videos: Arc<dyn VideoRepository>,
}

impl std::fmt::Debug for DefaultGetVideoByIdUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultGetVideoByIdUseCase").finish_non_exhaustive()
    }
}

impl DefaultGetVideoByIdUseCase {
    pub fn new(videos: Arc<dyn VideoRepository>) -> Self {
        Self { videos }
    }
}

#[async_trait]
impl GetVideoByIdUseCase for DefaultGetVideoByIdUseCase {
    async fn execute(&self, id: &str) -> Result<VideoOutput> {
        let id = VideoID::from(id);
        self.videos
            .find_by_id(&id)
            .await
            .map_err(|err| {
                CatalogError::internal(format!("Failed to load video {id}"), err)
            })?
            .map(|video| VideoOutput::from(&video))
            .ok_or_else(|| {
                CatalogError::NotFound(format!(
                    "Video with ID {id} was not found"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::video::test_support::*;

    #[tokio::test]
    async fn returns_read_model() {
        let harness = Harness::default();
        let mut video = Video::new_video(valid_details());
        video.update_banner_media(Some(ImageMedia::with("c", "b.png", "loc")));
        harness.videos.insert(video.clone()).await;

        let output = DefaultGetVideoByIdUseCase::new(harness.videos.clone())
            .execute(video.id().as_str())
            .await
            .unwrap();

        assert_eq!(output.id, *video.id());
        assert_eq!(output.rating.as_deref(), Some("L"));
        assert_eq!(output.banner.unwrap().name, "b.png");
        assert!(output.video.is_none());
    }

    #[tokio::test]
    async fn missing_video_is_not_found() {
        let harness = Harness::default();
        let err = DefaultGetVideoByIdUseCase::new(harness.videos.clone())
            .execute("missing")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
