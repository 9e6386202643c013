use async_trait::async_trait;
use marquee_model::{VideoID, VideoMediaType};

use super::aggregate::Video;
use super::media::{AudioVideoMedia, ImageMedia};
use super::resource::{Resource, VideoResource};

/// Aggregate store for videos.
///
/// `create` and `update` take ownership of the aggregate, drain its pending
/// events and hand the stored copy back.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create(&self, video: Video) -> anyhow::Result<Video>;

    async fn update(&self, video: Video) -> anyhow::Result<Video>;

    async fn find_by_id(&self, id: &VideoID) -> anyhow::Result<Option<Video>>;

    async fn delete_by_id(&self, id: &VideoID) -> anyhow::Result<()>;

    async fn exists_by_id(&self, id: &VideoID) -> anyhow::Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Blob storage for the media attached to a video.
#[async_trait]
pub trait MediaResourceGateway: Send + Sync {
    async fn store_audio_video(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<AudioVideoMedia>;

    async fn store_image(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<ImageMedia>;

    async fn get_resource(
        &self,
        video_id: &VideoID,
        media_type: VideoMediaType,
    ) -> anyhow::Result<Option<Resource>>;

    /// Remove every stored resource belonging to `video_id`.
    async fn clear_resources(&self, video_id: &VideoID) -> anyhow::Result<()>;
}
