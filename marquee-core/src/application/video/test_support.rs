//! In-memory collaborators for use case tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use marquee_model::{
    CastMemberID, CategoryID, GenreID, Rating, VideoID, VideoMediaType,
};
use tokio::sync::Mutex;

use super::create::DefaultCreateVideoUseCase;
use super::media_upload::MediaResources;
use super::update::DefaultUpdateVideoUseCase;
use crate::domain::references::ReferenceRepository;
use crate::domain::video::{
    AudioVideoMedia, ImageMedia, MediaResourceGateway, Resource, Video,
    VideoDetails, VideoRepository, VideoResource,
};

#[derive(Default)]
pub struct FakeVideoRepository {
    videos: Mutex<HashMap<VideoID, Video>>,
    created: Mutex<Vec<Video>>,
    updated: Mutex<Vec<Video>>,
    fail_writes: AtomicBool,
}

impl FakeVideoRepository {
    pub async fn insert(&self, video: Video) {
        self.videos.lock().await.insert(video.id().clone(), video);
    }

    pub async fn get(&self, id: &VideoID) -> Option<Video> {
        self.videos.lock().await.get(id).cloned()
    }

    pub async fn created(&self) -> Vec<Video> {
        self.created.lock().await.clone()
    }

    pub async fn updated(&self) -> Vec<Video> {
        self.updated.lock().await.clone()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl VideoRepository for FakeVideoRepository {
    async fn create(&self, video: Video) -> anyhow::Result<Video> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("video store unavailable");
        }
        self.created.lock().await.push(video.clone());
        self.insert(video.clone()).await;
        Ok(video)
    }

    async fn update(&self, video: Video) -> anyhow::Result<Video> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("video store unavailable");
        }
        self.updated.lock().await.push(video.clone());
        self.insert(video.clone()).await;
        Ok(video)
    }

    async fn find_by_id(&self, id: &VideoID) -> anyhow::Result<Option<Video>> {
        Ok(self.get(id).await)
    }

    async fn delete_by_id(&self, id: &VideoID) -> anyhow::Result<()> {
        self.videos.lock().await.remove(id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeMediaGateway {
    resources: Mutex<HashMap<(VideoID, VideoMediaType), Resource>>,
    stored: Mutex<Vec<(VideoID, VideoMediaType)>>,
    cleared: Mutex<Vec<VideoID>>,
    fail_uploads: AtomicBool,
    fail_clear: AtomicBool,
}

impl FakeMediaGateway {
    pub async fn stored(&self) -> Vec<(VideoID, VideoMediaType)> {
        self.stored.lock().await.clone()
    }

    pub async fn cleared(&self) -> Vec<VideoID> {
        self.cleared.lock().await.clone()
    }

    pub fn fail_uploads(&self) {
        self.fail_uploads.store(true, Ordering::SeqCst);
    }

    pub fn fail_clear(&self) {
        self.fail_clear.store(true, Ordering::SeqCst);
    }

    pub async fn resource_at(
        &self,
        video_id: &VideoID,
        media_type: VideoMediaType,
    ) -> Option<Resource> {
        self.resources
            .lock()
            .await
            .get(&(video_id.clone(), media_type))
            .cloned()
    }

    async fn put(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<(String, Resource)> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            anyhow::bail!("blob store unavailable");
        }
        let media_type = resource.media_type();
        let location = format!("videoId-{video_id}/type-{media_type}");
        let resource = resource.into_resource();
        self.stored.lock().await.push((video_id.clone(), media_type));
        self.resources
            .lock()
            .await
            .insert((video_id.clone(), media_type), resource.clone());
        Ok((location, resource))
    }
}

#[async_trait]
impl MediaResourceGateway for FakeMediaGateway {
    async fn store_audio_video(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<AudioVideoMedia> {
        let (location, resource) = self.put(video_id, resource).await?;
        Ok(AudioVideoMedia::with(
            resource.checksum(),
            resource.name(),
            location,
        ))
    }

    async fn store_image(
        &self,
        video_id: &VideoID,
        resource: VideoResource,
    ) -> anyhow::Result<ImageMedia> {
        let (location, resource) = self.put(video_id, resource).await?;
        Ok(ImageMedia::with(resource.checksum(), resource.name(), location))
    }

    async fn get_resource(
        &self,
        video_id: &VideoID,
        media_type: VideoMediaType,
    ) -> anyhow::Result<Option<Resource>> {
        Ok(self
            .resources
            .lock()
            .await
            .get(&(video_id.clone(), media_type))
            .cloned())
    }

    async fn clear_resources(&self, video_id: &VideoID) -> anyhow::Result<()> {
        if self.fail_clear.load(Ordering::SeqCst) {
            anyhow::bail!("blob store refused delete");
        }
        self.cleared.lock().await.push(video_id.clone());
        self.resources
            .lock()
            .await
            .retain(|(owner, _), _| owner != video_id);
        Ok(())
    }
}

pub struct KnownIds<Id> {
    known: HashSet<Id>,
}

impl<Id> Default for KnownIds<Id> {
    fn default() -> Self {
        Self {
            known: HashSet::new(),
        }
    }
}

#[async_trait]
impl<Id> ReferenceRepository<Id> for KnownIds<Id>
where
    Id: Clone + Eq + std::hash::Hash + Send + Sync + 'static,
{
    async fn exists_by_ids(&self, ids: &[Id]) -> anyhow::Result<Vec<Id>> {
        Ok(ids
            .iter()
            .filter(|id| self.known.contains(id))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct Harness {
    pub categories: Arc<KnownIds<CategoryID>>,
    pub genres: Arc<KnownIds<GenreID>>,
    pub cast_members: Arc<KnownIds<CastMemberID>>,
    pub videos: Arc<FakeVideoRepository>,
    pub media: Arc<FakeMediaGateway>,
}

impl Harness {
    pub fn create_use_case(&self) -> DefaultCreateVideoUseCase {
        DefaultCreateVideoUseCase::new(
            self.categories.clone(),
            self.genres.clone(),
            self.cast_members.clone(),
            self.videos.clone(),
            self.media.clone(),
        )
    }

    pub fn update_use_case(&self) -> DefaultUpdateVideoUseCase {
        DefaultUpdateVideoUseCase::new(
            self.categories.clone(),
            self.genres.clone(),
            self.cast_members.clone(),
            self.videos.clone(),
            self.media.clone(),
        )
    }
}

pub fn valid_details() -> VideoDetails {
    VideoDetails {
        title: Some("System Design Interviews".into()),
        description: Some("Common questions, explained".into()),
        launched_at: Some(2022),
        duration: Some(120.10),
        opened: Some(true),
        published: Some(true),
        rating: Some(Rating::L),
        ..Default::default()
    }
}

/// Resource whose content is its own name.
pub fn resource(name: &str) -> Resource {
    let content_type = if name.ends_with(".png") {
        "image/png"
    } else {
        "video/mp4"
    };
    Resource::from_content(name.as_bytes().to_vec(), content_type, name)
}

pub fn all_resources() -> MediaResources {
    MediaResources {
        video: Some(resource("video.mp4")),
        trailer: Some(resource("trailer.mp4")),
        banner: Some(resource("banner.png")),
        thumbnail: Some(resource("thumbnail.png")),
        thumbnail_half: Some(resource("thumbnail_half.png")),
    }
}
