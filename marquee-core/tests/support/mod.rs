//! Shared fixtures and recording collaborators for core integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use marquee_core::application::video::{
    CreateVideoCommand, DefaultCreateVideoUseCase, MediaResources,
};
use marquee_core::domain::video::{
    AudioVideoMedia, ImageMedia, MediaResourceGateway, Resource, Video,
    VideoDetails, VideoRepository, VideoResource,
};
use marquee_core::infrastructure::{
    DefaultMediaResourceGateway, InMemoryReferenceRepository,
    InMemoryStorageService,
};
use marquee_core::model::{
    CastMemberID, CategoryID, GenreID, Rating, VideoID, VideoMediaType,
};
use tokio::sync::Mutex;

/// Video store that records every call and can be told to fail writes.
#[derive(Default)]
pub struct RecordingVideoRepository {
    videos: Mutex<HashMap<VideoID, Video>>,
    pub created: Mutex<Vec<Video>>,
    pub updated: Mutex<Vec<Video>>,
    pub update_calls: AtomicUsize,
    fail_create: AtomicBool,
}

impl RecordingVideoRepository {
    pub fn failing_create() -> Self {
        let repository = Self::default();
        repository.fail_create.store(true, Ordering::SeqCst);
        repository
    }

    pub async fn seed(&self, video: Video) {
        self.videos.lock().await.insert(video.id().clone(), video);
    }

    pub async fn load(&self, id: &VideoID) -> Option<Video> {
        self.videos.lock().await.get(id).cloned()
    }
}

#[async_trait]
impl VideoRepository for RecordingVideoRepository {
    async fn create(&self, video: Video) -> anyhow::Result<Video> {
        if self.fail_create.load(Ordering::SeqCst) {
            anyhow::bail!("Gateway error");
        }
        self.created.lock().await.push(video.clone());
        self.seed(video.clone()).await;
        Ok(video)
    }

    async fn update(&self, video: Video) -> anyhow::Result<Video> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.updated.lock().await.push(video.clone());
        self.seed(video.clone()).await;
        Ok(video)
    }

    async fn find_by_id(&self, id: &VideoID) -> anyhow::Result<Option<Video>> {
        Ok(self.load(id).await)
    }

    async fn delete_by_id(&self, id: &VideoID) -> anyhow::Result<()> {
        self.videos.lock().await.remove(id);
        Ok(())
    }
}

/// Media gateway backed by in-memory storage that counts calls.
pub struct RecordingMediaGateway {
    inner: DefaultMediaResourceGateway,
    pub storage: Arc<InMemoryStorageService>,
    pub store_calls: AtomicUsize,
    pub cleared: Mutex<Vec<VideoID>>,
}

impl Default for RecordingMediaGateway {
    fn default() -> Self {
        let storage = Arc::new(InMemoryStorageService::new());
        Self {
            inner: DefaultMediaResourceGateway::new(storage.clone()),
            storage,
            store_calls: AtomicUsize::new(0),
            cleared: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MediaResourceGateway for RecordingMediaGateway {
    async fn store_audio_video(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<AudioVideoMedia> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.store_audio_video(video_id, resource).await
    }

    async fn store_image(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<ImageMedia> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.store_image(video_id, resource).await
    }

    async fn get_resource(
        &self,
        video_id: &VideoID,
        media_type: VideoMediaType,
    ) -> anyhow::Result<Option<Resource>> {
        self.inner.get_resource(video_id, media_type).await
    }

    async fn clear_resources(&self, video_id: &VideoID) -> anyhow::Result<()> {
        self.cleared.lock().await.push(video_id.clone());
        self.inner.clear_resources(video_id).await
    }
}

pub struct Fixture {
    pub categories: Arc<InMemoryReferenceRepository<CategoryID>>,
    pub genres: Arc<InMemoryReferenceRepository<GenreID>>,
    pub cast_members: Arc<InMemoryReferenceRepository<CastMemberID>>,
    pub videos: Arc<RecordingVideoRepository>,
    pub media: Arc<RecordingMediaGateway>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_videos(RecordingVideoRepository::default())
    }

    pub fn with_videos(videos: RecordingVideoRepository) -> Self {
        Self {
            categories: Arc::new(InMemoryReferenceRepository::default()),
            genres: Arc::new(InMemoryReferenceRepository::default()),
            cast_members: Arc::new(InMemoryReferenceRepository::default()),
            videos: Arc::new(videos),
            media: Arc::new(RecordingMediaGateway::default()),
        }
    }

    pub fn create_video(&self) -> DefaultCreateVideoUseCase {
        DefaultCreateVideoUseCase::new(
            self.categories.clone(),
            self.genres.clone(),
            self.cast_members.clone(),
            self.videos.clone(),
            self.media.clone(),
        )
    }

    /// Register one id of each reference kind and return them.
    pub async fn seed_references(&self) -> (String, String, String) {
        self.categories.insert(CategoryID::from("aulas")).await;
        self.genres.insert(GenreID::from("tech")).await;
        self.cast_members.insert(CastMemberID::from("wesley")).await;
        ("aulas".into(), "tech".into(), "wesley".into())
    }
}

pub fn resource(name: &str, content_type: &str) -> Resource {
    Resource::from_content(
        format!("content of {name}").into_bytes(),
        content_type,
        name,
    )
}

pub fn all_resources() -> MediaResources {
    MediaResources {
        video: Some(resource("video.mp4", "video/mp4")),
        trailer: Some(resource("trailer.mp4", "video/mp4")),
        banner: Some(resource("banner.jpg", "image/jpeg")),
        thumbnail: Some(resource("thumbnail.jpg", "image/jpeg")),
        thumbnail_half: Some(resource("thumbnail_half.jpg", "image/jpeg")),
    }
}

pub fn valid_command() -> CreateVideoCommand {
    CreateVideoCommand {
        title: Some("System Design Interviews".into()),
        description: Some(
            "A walkthrough of the questions asked in system design rounds"
                .into(),
        ),
        launched_at: Some(2022),
        duration: Some(120.10),
        opened: Some(true),
        published: Some(true),
        rating: Some("L".into()),
        ..Default::default()
    }
}

pub fn valid_details() -> VideoDetails {
    VideoDetails {
        title: Some("System Design Interviews".into()),
        description: Some("Walkthrough".into()),
        launched_at: Some(2022),
        duration: Some(120.10),
        opened: Some(true),
        published: Some(true),
        rating: Some(Rating::L),
        ..Default::default()
    }
}

/// Video with pending media in both audio/video slots, events drained.
pub fn video_with_media() -> Video {
    let mut video = Video::new_video(valid_details());
    video.update_video_media(Some(AudioVideoMedia::with(
        "abc",
        "video.mp4",
        "raw/video.mp4",
    )));
    video.update_trailer_media(Some(AudioVideoMedia::with(
        "def",
        "trailer.mp4",
        "raw/trailer.mp4",
    )));
    video.take_events();
    video
}
