use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::VideoID;
use tracing::info;

use crate::domain::video::{MediaResourceGateway, VideoRepository};
use crate::error::{CatalogError, Result};

#[async_trait]
pub trait DeleteVideoUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<()>;
}

/// Removes a video and every resource stored for it. Deleting an unknown id
/// still clears its storage prefix.
pub struct DefaultDeleteVideoUseCase {
    videos: Arc<dyn VideoRepository>,
    media: Arc<dyn MediaResourceGateway>,
}

impl fmt::Debug for DefaultDeleteVideoUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultDeleteVideoUseCase")
            .field("videos", &type_name_of_val(self.videos.as_ref()))
            .field("media", &type_name_of_val(self.media.as_ref()))
            .finish()
    }
}

impl DefaultDeleteVideoUseCase {
    pub fn new(
        videos: Arc<dyn VideoRepository>,
        media: Arc<dyn MediaResourceGateway>,
    ) -> Self {
        Self { videos, media }
    }
}

#[async_trait]
impl DeleteVideoUseCase for DefaultDeleteVideoUseCase {
    async fn execute(&self, id: &str) -> Result<()> {
        let id = VideoID::from(id);
        self.videos.delete_by_id(&id).await.map_err(|err| {
            CatalogError::internal(format!("Failed to delete video {id}"), err)
        })?;
        self.media.clear_resources(&id).await.map_err(|err| {
            CatalogError::internal(
                format!("Failed to clear resources of video {id}"),
                err,
            )
        })?;
        info!(video_id = %id, "video deleted");
        Ok(())
    }
}
