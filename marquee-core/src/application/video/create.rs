use std::any::type_name_of_val;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::{Rating, VideoID};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::media_upload::{MediaResources, attach_media};
use super::references::validate_references;
use crate::domain::references::{
    CastMemberRepository, CategoryRepository, GenreRepository,
};
use crate::domain::validation::{Notification, Validate, ValidationHandler};
use crate::domain::video::{
    MediaResourceGateway, Video, VideoDetails, VideoRepository,
};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Default)]
pub struct CreateVideoCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub launched_at: Option<i32>,
    pub duration: Option<f64>,
    pub opened: Option<bool>,
    pub published: Option<bool>,
    /// Rating label or name; unknown values are reported as a missing rating
    pub rating: Option<String>,
    pub categories: HashSet<String>,
    pub genres: HashSet<String>,
    pub cast_members: HashSet<String>,
    pub resources: MediaResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVideoOutput {
    pub id: VideoID,
}

#[async_trait]
pub trait CreateVideoUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateVideoCommand,
    ) -> Result<CreateVideoOutput>;
}

/// Validates a new video, uploads its media and persists it.
///
/// Reference and field errors are collected into one [`Notification`] and
/// returned together. When uploading or persisting fails after validation
/// passed, every resource stored for the video is removed before the error
/// is surfaced.
pub struct DefaultCreateVideoUseCase {
    categories: Arc<CategoryRepository>,
    genres: Arc<GenreRepository>,
    cast_members: Arc<CastMemberRepository>,
    videos: Arc<dyn VideoRepository>,
    media: Arc<dyn MediaResourceGateway>,
}

impl fmt::Debug for DefaultCreateVideoUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultCreateVideoUseCase")
            .field("categories", &type_name_of_val(self.categories.as_ref()))
            .field("genres", &type_name_of_val(self.genres.as_ref()))
            .field(
                "cast_members",
                &type_name_of_val(self.cast_members.as_ref()),
            )
            .field("videos", &type_name_of_val(self.videos.as_ref()))
            .field("media", &type_name_of_val(self.media.as_ref()))
            .finish()
    }
}

impl DefaultCreateVideoUseCase {
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

    async fn store(
        &self,
        mut video: Video,
        resources: MediaResources,
    ) -> anyhow::Result<Video> {
        attach_media(self.media.as_ref(), &mut video, resources).await?;
        self.videos.create(video).await
    }
}

#[async_trait]
impl CreateVideoUseCase for DefaultCreateVideoUseCase {
    async fn execute(
        &self,
        command: CreateVideoCommand,
    ) -> Result<CreateVideoOutput> {
        let CreateVideoCommand {
            title,
            description,
            launched_at,
            duration,
            opened,
            published,
            rating,
            categories,
            genres,
            cast_members,
            resources,
        } = command;

        let details = VideoDetails {
            title,
            description,
            launched_at,
            duration,
            opened,
            published,
            rating: rating.as_deref().and_then(Rating::of),
            categories: to_ids(categories),
            genres: to_ids(genres),
            cast_members: to_ids(cast_members),
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

        let video = Video::new_video(details);
        video.validate(&mut notification)?;
        if notification.has_error() {
            return Err(CatalogError::validation(
                "Could not create Aggregate Video",
                notification,
            ));
        }

        let id = video.id().clone();
        match self.store(video, resources).await {
            Ok(video) => {
                info!(video_id = %video.id(), "video created");
                Ok(CreateVideoOutput { id })
            }
            Err(err) => {
                if let Err(cleanup) = self.media.clear_resources(&id).await {
                    warn!(
                        video_id = %id,
                        error = %cleanup,
                        "failed to clear resources after aborted create"
                    );
                }
                Err(CatalogError::internal(
                    format!("An error on create video was observed [videoId:{id}]"),
                    err,
                ))
            }
        }
    }
}

/// Run the three reference checks against one handler.
pub(crate) async fn validate_video_references(
    details: &VideoDetails,
    categories: &CategoryRepository,
    genres: &GenreRepository,
    cast_members: &CastMemberRepository,
    handler: &mut dyn ValidationHandler,
) -> Result<()> {
    validate_references("categories", &details.categories, categories, handler)
        .await?;
    validate_references("genres", &details.genres, genres, handler).await?;
    validate_references(
        "cast members",
        &details.cast_members,
        cast_members,
        handler,
    )
    .await
}

pub(crate) fn to_ids<Id: From<String> + Eq + std::hash::Hash>(
    raw: HashSet<String>,
) -> HashSet<Id> {
    raw.into_iter().map(Id::from).collect()
}
