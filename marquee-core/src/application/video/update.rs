use std::any::type_name_of_val;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::{Rating, VideoID};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::create::{to_ids, validate_video_references};
use super::media_upload::{
    MediaResources, attach_media, restore_media, snapshot_media,
};
use crate::domain::references::{
    CastMemberRepository, CategoryRepository, GenreRepository,
};
use crate::domain::validation::{Notification, Validate, ValidationHandler};
use crate::domain::video::{
    MediaResourceGateway, Video, VideoDetails, VideoRepository,
};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Default)]
pub struct UpdateVideoCommand {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub launched_at: Option<i32>,
    pub duration: Option<f64>,
    pub opened: Option<bool>,
    pub published: Option<bool>,
    pub rating: Option<String>,
    pub categories: HashSet<String>,
    pub genres: HashSet<String>,
    pub cast_members: HashSet<String>,
    /// Only slots with a payload are replaced
    pub resources: MediaResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVideoOutput {
    pub id: VideoID,
}

#[async_trait]
pub trait UpdateVideoUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateVideoCommand,
    ) -> Result<UpdateVideoOutput>;
}

/// Replaces the descriptive attributes of an existing video and any media
/// slots supplied with the command.
pub struct DefaultUpdateVideoUseCase {
    categories: Arc<CategoryRepository>,
    genres: Arc<GenreRepository>,
    cast_members: Arc<CastMemberRepository>,
    videos: Arc<dyn VideoRepository>,
    media: Arc<dyn MediaResourceGateway>,
}

impl fmt::Debug for DefaultUpdateVideoUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultUpdateVideoUseCase")
            .field("videos", &type_name_of_val(self.videos.as_ref()))
            .field("media", &type_name_of_val(self.media.as_ref()))
            .finish_non_exhaustive()
    }
}

impl DefaultUpdateVideoUseCase {
    pub fn new(
        categories: Arc<CategoryRepository>,
        genres: Arc<GenreRepository>,
        cast_members: Arc<CastMemberRepository>,
        videos: Arc<dyn VideoRepository>,
        media: Arc<dyn MediaResourceGateway>,
    ) -> Self {
        Self {
            categories,
            genres,
            cast_members,
            videos,
            media,
        }
    }

    /// Upload the replacement media and save the video. When either step
    /// fails the replaced slots get their previous payload back, so stored
    /// bytes keep matching the media the saved video describes.
    async fn store(
        &self,
        mut video: Video,
        resources: MediaResources,
    ) -> anyhow::Result<Video> {
        let id = video.id().clone();
        let gateway = self.media.as_ref();
        let previous = snapshot_media(gateway, &id, &resources).await?;

        let stored = match attach_media(gateway, &mut video, resources).await {
            Ok(()) => self.videos.update(video).await,
            Err(err) => Err(err),
        };
        if stored.is_err() && !previous.is_empty() {
            restore_media(gateway, &id, previous).await;
        }
        stored
    }
}

#[async_trait]
impl UpdateVideoUseCase for DefaultUpdateVideoUseCase {
    async fn execute(
        &self,
        command: UpdateVideoCommand,
    ) -> Result<UpdateVideoOutput> {
        let id = VideoID::from_string(command.id);
        let mut video = self
            .videos
            .find_by_id(&id)
            .await
            .map_err(|err| {
                CatalogError::internal(format!("Failed to load video {id}"), err)
            })?
            .ok_or_else(|| {
                CatalogError::NotFound(format!(
                    "Video with ID {id} was not found"
                ))
            })?;

        let details = VideoDetails {
            title: command.title,
            description: command.description,
            launched_at: command.launched_at,
            duration: command.duration,
            opened: command.opened,
            published: command.published,
            rating: command.rating.as_deref().and_then(Rating::of),
            categories: to_ids(command.categories),
            genres: to_ids(command.genres),
            cast_members: to_ids(command.cast_members),
        };

        let mut notification = Notification::create();
        validate_video_references(
            &details,
            self.categories.as_ref(),
            self.genres.as_ref(),
            self.cast_members.as_ref(),
            &mut notification,
        )
        .await?;

        video.update(details);
        video.validate(&mut notification)?;
        if notification.has_error() {
            return Err(CatalogError::validation(
                "Could not update Aggregate Video",
                notification,
            ));
        }

        let stored = self.store(video, command.resources).await.map_err(|err| {
            CatalogError::internal(
                format!("An error on update video was observed [videoId:{id}]"),
                err,
            )
        })?;

        info!(video_id = %stored.id(), "video updated");
        Ok(UpdateVideoOutput { id })
    }
}
