use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::{MediaStatus, VideoID};
use tracing::{debug, info, warn};

use crate::domain::video::VideoRepository;
use crate::error::{CatalogError, Result};

/// Encoder progress for one audio/video asset of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMediaStatusCommand {
    pub status: MediaStatus,
    pub video_id: String,
    pub resource_id: String,
    /// Output folder, used for `Completed` only
    pub folder: Option<String>,
    /// Output file name, used for `Completed` only
    pub filename: Option<String>,
}

impl UpdateMediaStatusCommand {
    pub fn with(
        status: MediaStatus,
        video_id: impl Into<String>,
        resource_id: impl Into<String>,
        folder: Option<String>,
        filename: Option<String>,
    ) -> Self {
        Self {
            status,
            video_id: video_id.into(),
            resource_id: resource_id.into(),
            folder,
            filename,
        }
    }

    fn encoded_location(&self) -> String {
        match (&self.folder, &self.filename) {
            (Some(folder), Some(filename)) => format!("{folder}/{filename}"),
            (Some(folder), None) => folder.clone(),
            (None, Some(filename)) => filename.clone(),
            (None, None) => String::new(),
        }
    }
}

#[async_trait]
pub trait UpdateMediaStatusUseCase: Send + Sync {
    async fn execute(&self, command: UpdateMediaStatusCommand) -> Result<()>;
}

/// Applies encoder callbacks to the matching media slot.
///
/// Callbacks are delivered at least once and may arrive out of order, so an
/// unknown video or a resource id that no longer sits in the video or
/// trailer slot is skipped without error. There is no ordering guard: the
/// last callback applied wins, even when it moves a slot backwards.
pub struct DefaultUpdateMediaStatusUseCase {
    videos: Arc<dyn VideoRepository>,
}

impl fmt::Debug for DefaultUpdateMediaStatusUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultUpdateMediaStatusUseCase")
            .field("videos", &type_name_of_val(self.videos.as_ref()))
            .finish()
    }
}

impl DefaultUpdateMediaStatusUseCase {
    pub fn new(videos: Arc<dyn VideoRepository>) -> Self {
        Self { videos }
    }
}

#[async_trait]
impl UpdateMediaStatusUseCase for DefaultUpdateMediaStatusUseCase {
    async fn execute(&self, command: UpdateMediaStatusCommand) -> Result<()> {
        let video_id = VideoID::from(command.video_id.as_str());
        let Some(mut video) =
            self.videos.find_by_id(&video_id).await.map_err(|err| {
                CatalogError::internal(
                    format!("Failed to load video {video_id}"),
                    err,
                )
            })?
        else {
            debug!(video_id = %video_id, "status update for unknown video skipped");
            return Ok(());
        };

        let Some(slot) = video.audio_video_slot_of(&command.resource_id) else {
            debug!(
                video_id = %video_id,
                resource_id = %command.resource_id,
                "status update for detached resource skipped"
            );
            return Ok(());
        };

        match command.status {
            MediaStatus::Processing => {
                video.processing(slot);
            }
            MediaStatus::Completed => {
                video.completed(slot, &command.encoded_location());
            }
            MediaStatus::Error => {
                video.failed(slot);
            }
            MediaStatus::Pending => {
                warn!(
                    video_id = %video_id,
                    resource_id = %command.resource_id,
                    "encoder reported pending status, ignoring"
                );
                return Ok(());
            }
        }

        self.videos.update(video).await.map_err(|err| {
            CatalogError::internal(
                format!("Failed to update media status of video {video_id}"),
                err,
            )
        })?;

        info!(
            video_id = %video_id,
            slot = %slot,
            status = %command.status,
            "media status updated"
        );
        Ok(())
    }
}
