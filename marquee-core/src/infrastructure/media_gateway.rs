use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::{VideoID, VideoMediaType};
use tracing::debug;

use super::storage::StorageService;
use crate::domain::video::{
    AudioVideoMedia, ImageMedia, MediaResourceGateway, Resource, VideoResource,
};

/// Stores media under `videoId-<id>/type-<SLOT>` keys.
pub struct DefaultMediaResourceGateway {
    storage: Arc<dyn StorageService>,
}

impl fmt::Debug for DefaultMediaResourceGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultMediaResourceGateway")
            .field("storage", &type_name_of_val(self.storage.as_ref()))
            .finish()
    }
}

impl DefaultMediaResourceGateway {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    pub fn folder_of(video_id: &VideoID) -> String {
        format!("videoId-{video_id}")
    }

    pub fn key_of(video_id: &VideoID, media_type: VideoMediaType) -> String {
        format!("{}/type-{}", Self::folder_of(video_id), media_type.name())
    }

    /// Store the payload and return `(checksum, name, key)`.
    async fn put(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<(String, String, String)> {
        let key = Self::key_of(video_id, resource.media_type());
        let resource = resource.into_resource();
        let checksum = resource.checksum().to_string();
        let name = resource.name().to_string();

        self.storage.store(&key, resource).await?;
        debug!(video_id = %video_id, key = %key, "stored media resource");
        Ok((checksum, name, key))
    }
}

#[async_trait]
impl MediaResourceGateway for DefaultMediaResourceGateway {
    async fn store_audio_video(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<AudioVideoMedia> {
        let (checksum, name, key) = self.put(video_id, resource).await?;
        Ok(AudioVideoMedia::with(checksum, name, key))
    }

    async fn store_image(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<ImageMedia> {
        let (checksum, name, key) = self.put(video_id, resource).await?;
        Ok(ImageMedia::with(checksum, name, key))
    }

    async fn get_resource(
        &self,
        video_id: &VideoID,
        media_type: VideoMediaType,
    ) -> anyhow::Result<Option<Resource>> {
        self.storage.get(&Self::key_of(video_id, media_type)).await
    }

    async fn clear_resources(&self, video_id: &VideoID) -> anyhow::Result<()> {
        // trailing slash keeps `videoId-1` from matching `videoId-10`
        let prefix = format!("{}/", Self::folder_of(video_id));
        let keys = self.storage.list(&prefix).await?;
        if keys.is_empty() {
            return Ok(());
        }
        self.storage.delete_all(&keys).await?;
        debug!(video_id = %video_id, removed = keys.len(), "cleared media resources");
        Ok(())
    }
}
