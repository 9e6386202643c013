use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::{VideoID, VideoMediaType};

use crate::domain::video::MediaResourceGateway;
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMediaCommand {
    pub video_id: String,
    /// Slot name such as `VIDEO` or `THUMBNAIL_HALF`
    pub media_type: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct MediaOutput {
    pub content: Vec<u8>,
    pub content_type: String,
    pub name: String,
}

impl std::fmt::Debug for MediaOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaOutput")
            .field("content_len", &self.content.len())
            .field("content_type", &self.content_type)
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait]
pub trait GetMediaUseCase: Send + Sync {
    async fn execute(&self, command: GetMediaCommand) -> Result<MediaOutput>;
}

pub struct DefaultGetMediaUseCase {
    media: Arc<dyn MediaResourceGateway>,
}

impl std::fmt::Debug for DefaultGetMediaUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultGetMediaUseCase").finish_non_exhaustive()
    }
}

impl DefaultGetMediaUseCase {
    pub fn new(media: Arc<dyn MediaResourceGateway>) -> Self {
        Self { media }
    }
}

#[async_trait]
impl GetMediaUseCase for DefaultGetMediaUseCase {
    async fn execute(&self, command: GetMediaCommand) -> Result<MediaOutput> {
        let id = VideoID::from_string(command.video_id);
        let media_type: VideoMediaType =
            command.media_type.parse().map_err(|_| {
                CatalogError::NotFound(format!(
                    "Media type {} doesn't exist",
                    command.media_type
                ))
            })?;

        let resource = self
            .media
            .get_resource(&id, media_type)
            .await
            .map_err(|err| {
                CatalogError::internal(
                    format!("Failed to read {media_type} of video {id}"),
                    err,
                )
            })?
            .ok_or_else(|| {
                CatalogError::NotFound(format!(
                    "Resource {media_type} not found for video {id}"
                ))
            })?;

        Ok(MediaOutput {
            content_type: resource.content_type().to_string(),
            name: resource.name().to_string(),
            content: resource.into_content(),
        })
    }
}
