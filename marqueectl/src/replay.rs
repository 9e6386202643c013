//! Replays a parsed script against a [`VideoCatalog`], recording what each
//! step returned and which events it published.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use marquee_core::CatalogError;
use marquee_core::application::video::{
    AudioVideoMediaOutput, CreateVideoCommand, GetMediaCommand,
    MediaResources, UpdateMediaStatusCommand, UpdateVideoCommand,
};
use marquee_core::catalog::VideoCatalog;
use marquee_core::domain::video::{Resource, VideoEvent};
use marquee_core::infrastructure::encoder::{
    VideoEncoderCompleted, VideoEncoderError, VideoEncoderResult,
    VideoMessage, VideoMetadata,
};
use marquee_model::{VideoID, VideoMediaType};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{info, warn};

use crate::script::{MediaFiles, ScriptLine, Step, VideoSpec};

const REPLAY_OUTPUT_BUCKET: &str = "marquee-replay";

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub line: usize,
    pub op: &'static str,
    #[serde(flatten)]
    pub outcome: StepOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<VideoEvent>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Ok { output: Value },
    Failed { error: String },
    ExpectedFailure { error: String },
    UnexpectedSuccess { expected: String },
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            StepOutcome::Failed { .. } | StepOutcome::UnexpectedSuccess { .. }
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ReplaySummary {
    pub steps: Vec<StepReport>,
}

impl ReplaySummary {
    pub fn failures(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome.is_failure())
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

pub struct Replayer {
    catalog: VideoCatalog,
    events: broadcast::Receiver<VideoEvent>,
    aliases: HashMap<String, VideoID>,
    base_dir: PathBuf,
}

impl fmt::Debug for Replayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replayer")
            .field("aliases", &self.aliases)
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}

impl Replayer {
    /// Media paths in the script resolve against `base_dir`.
    pub fn new(catalog: VideoCatalog, base_dir: impl Into<PathBuf>) -> Self {
        let events = catalog.events.subscribe();
        Self {
            catalog,
            events,
            aliases: HashMap::new(),
            base_dir: base_dir.into(),
        }
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    pub fn video_id(&self, alias: &str) -> anyhow::Result<VideoID> {
        self.aliases
            .get(alias)
            .cloned()
            .with_context(|| format!("unknown video alias '{alias}'"))
    }

    pub async fn run(&mut self, script: &[ScriptLine]) -> ReplaySummary {
        let mut steps = Vec::with_capacity(script.len());

        for entry in script {
            let op = entry.step.name();
            let result = self.apply(&entry.step).await;
            let events = self.drain_events();

            let outcome = match (result, entry.expect_error.as_deref()) {
                (Ok(output), None) => StepOutcome::Ok { output },
                (Ok(_), Some(expected)) => StepOutcome::UnexpectedSuccess {
                    expected: expected.to_string(),
                },
                (Err(err), None) => StepOutcome::Failed {
                    error: describe(&err),
                },
                (Err(err), Some(expected)) => {
                    let error = describe(&err);
                    if error.contains(expected) {
                        StepOutcome::ExpectedFailure { error }
                    } else {
                        StepOutcome::Failed {
                            error: format!(
                                "expected error containing '{expected}', got: {error}"
                            ),
                        }
                    }
                }
            };

            if outcome.is_failure() {
                warn!(line = entry.line, op, ?outcome, "replay step failed");
            } else {
                info!(
                    line = entry.line,
                    op,
                    events = events.len(),
                    "replay step finished"
                );
            }

            steps.push(StepReport {
                line: entry.line,
                op,
                outcome,
                events,
            });
        }

        ReplaySummary { steps }
    }

    async fn apply(&mut self, step: &Step) -> anyhow::Result<Value> {
        match step {
            Step::Seed {
                categories,
                genres,
                cast_members,
            } => {
                for id in categories {
                    self.catalog.categories.insert(id.as_str().into()).await;
                }
                for id in genres {
                    self.catalog.genres.insert(id.as_str().into()).await;
                }
                for id in cast_members {
                    self.catalog.cast_members.insert(id.as_str().into()).await;
                }
                Ok(json!({
                    "categories": categories.len(),
                    "genres": genres.len(),
                    "cast_members": cast_members.len(),
                }))
            }
            Step::CreateVideo { alias, details } => {
                if self.aliases.contains_key(alias) {
                    bail!("video alias '{alias}' is already bound");
                }
                let resources = self.load_resources(&details.media).await?;
                let output = self
                    .catalog
                    .create_video
                    .execute(create_command(details, resources))
                    .await?;
                info!(alias = %alias, video_id = %output.id, "video created");
                self.aliases.insert(alias.clone(), output.id.clone());
                Ok(json!({ "id": output.id.as_str() }))
            }
            Step::UpdateVideo { video, details } => {
                let id = self.video_id(video)?;
                let resources = self.load_resources(&details.media).await?;
                let output = self
                    .catalog
                    .update_video
                    .execute(update_command(&id, details, resources))
                    .await?;
                Ok(json!({ "id": output.id.as_str() }))
            }
            Step::MediaStatus {
                video,
                media,
                status,
                folder,
                file_path,
            } => {
                let id = self.video_id(video)?;
                let slot = self.audio_video_media(&id, *media).await?;
                self.catalog
                    .update_media_status
                    .execute(UpdateMediaStatusCommand::with(
                        *status,
                        id.as_str(),
                        slot.id.clone(),
                        folder.clone(),
                        file_path.clone(),
                    ))
                    .await?;
                Ok(json!({ "resource_id": slot.id }))
            }
            Step::EncoderCompleted {
                video,
                media,
                folder,
                file_path,
            } => {
                let id = self.video_id(video)?;
                let slot = self.audio_video_media(&id, *media).await?;
                let message =
                    VideoEncoderResult::Completed(VideoEncoderCompleted {
                        id: id.to_string(),
                        output_bucket: REPLAY_OUTPUT_BUCKET.to_string(),
                        video: VideoMetadata {
                            encoded_video_folder: folder.clone(),
                            resource_id: slot.id.clone(),
                            file_path: file_path.clone(),
                        },
                    });
                self.catalog
                    .encoder_listener
                    .on_message(&message.to_json()?)
                    .await?;
                Ok(json!({ "resource_id": slot.id }))
            }
            Step::EncoderError {
                video,
                media,
                error,
            } => {
                let id = self.video_id(video)?;
                let slot = self.audio_video_media(&id, *media).await?;
                let message = VideoEncoderResult::Error(VideoEncoderError {
                    message: VideoMessage {
                        resource_id: slot.id.clone(),
                        file_path: slot.raw_location.clone(),
                    },
                    error: error.clone(),
                });
                self.catalog
                    .encoder_listener
                    .on_message(&message.to_json()?)
                    .await?;
                Ok(json!({ "resource_id": slot.id }))
            }
            Step::Show { video } => {
                let id = self.video_id(video)?;
                let output = self.catalog.get_video.execute(id.as_str()).await?;
                Ok(serde_json::to_value(output)?)
            }
            Step::Media { video, media_type } => {
                let id = self.video_id(video)?;
                let media = self
                    .catalog
                    .get_media
                    .execute(GetMediaCommand {
                        video_id: id.to_string(),
                        media_type: media_type.clone(),
                    })
                    .await?;
                Ok(json!({
                    "name": media.name,
                    "content_type": media.content_type,
                    "size": media.content.len(),
                }))
            }
            Step::Delete { video } => {
                let id = self.video_id(video)?;
                self.catalog.delete_video.execute(id.as_str()).await?;
                Ok(json!({ "deleted": id.as_str() }))
            }
        }
    }

    async fn audio_video_media(
        &self,
        id: &VideoID,
        media: VideoMediaType,
    ) -> anyhow::Result<AudioVideoMediaOutput> {
        let video = self.catalog.get_video.execute(id.as_str()).await?;
        let slot = match media {
            VideoMediaType::Video => video.video,
            VideoMediaType::Trailer => video.trailer,
            other => bail!("{other} is not an audio/video slot"),
        };
        slot.with_context(|| format!("video {id} has no {media} media"))
    }

    async fn load_resources(
        &self,
        files: &MediaFiles,
    ) -> anyhow::Result<MediaResources> {
        Ok(MediaResources {
            video: self.load_resource(files.video.as_deref()).await?,
            trailer: self.load_resource(files.trailer.as_deref()).await?,
            banner: self.load_resource(files.banner.as_deref()).await?,
            thumbnail: self.load_resource(files.thumbnail.as_deref()).await?,
            thumbnail_half: self
                .load_resource(files.thumbnail_half.as_deref())
                .await?,
        })
    }

    async fn load_resource(
        &self,
        path: Option<&Path>,
    ) -> anyhow::Result<Option<Resource>> {
        let Some(path) = path else {
            return Ok(None);
        };
        let full = self.base_dir.join(path);
        let content = tokio::fs::read(&full).await.with_context(|| {
            format!("failed to read media file {}", full.display())
        })?;
        let name = full
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("media")
            .to_string();
        Ok(Some(Resource::from_content(
            content,
            content_type_of(&full),
            name,
        )))
    }

    fn drain_events(&mut self) -> Vec<VideoEvent> {
        let mut events = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "replay fell behind the event bus");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        events
    }
}

fn create_command(
    details: &VideoSpec,
    resources: MediaResources,
) -> CreateVideoCommand {
    CreateVideoCommand {
        title: details.title.clone(),
        description: details.description.clone(),
        launched_at: details.launched_at,
        duration: details.duration,
        opened: details.opened,
        published: details.published,
        rating: details.rating.clone(),
        categories: details.categories.iter().cloned().collect(),
        genres: details.genres.iter().cloned().collect(),
        cast_members: details.cast_members.iter().cloned().collect(),
        resources,
    }
}

fn update_command(
    id: &VideoID,
    details: &VideoSpec,
    resources: MediaResources,
) -> UpdateVideoCommand {
    UpdateVideoCommand {
        id: id.to_string(),
        title: details.title.clone(),
        description: details.description.clone(),
        launched_at: details.launched_at,
        duration: details.duration,
        opened: details.opened,
        published: details.published,
        rating: details.rating.clone(),
        categories: details.categories.iter().cloned().collect(),
        genres: details.genres.iter().cloned().collect(),
        cast_members: details.cast_members.iter().cloned().collect(),
        resources,
    }
}

/// Validation failures list every collected message after the summary.
fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CatalogError>() {
        Some(catalog) if !catalog.errors().is_empty() => {
            let details: Vec<&str> =
                catalog.errors().iter().map(|e| e.message()).collect();
            format!("{catalog}: {}", details.join("; "))
        }
        _ => format!("{err:#}"),
    }
}

fn content_type_of(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("mp4" | "m4v") => "video/mp4",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
