use std::any::type_name_of_val;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::VideoID;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::video::{EventPublisher, Video, VideoRepository};

/// Process-local video store.
///
/// Writes drain the aggregate's pending events and publish them after the
/// video has been stored. Publishing is best effort: failures are logged and
/// never fail the write.
pub struct InMemoryVideoRepository {
    videos: RwLock<HashMap<VideoID, Video>>,
    events: Arc<dyn EventPublisher>,
}

impl fmt::Debug for InMemoryVideoRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryVideoRepository")
            .field("events", &type_name_of_val(self.events.as_ref()))
            .finish_non_exhaustive()
    }
}

impl InMemoryVideoRepository {
    pub fn new(events: Arc<dyn EventPublisher>) -> Self {
        Self {
            videos: RwLock::new(HashMap::new()),
            events,
        }
    }

    pub async fn len(&self) -> usize {
        self.videos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.videos.read().await.is_empty()
    }

    async fn save(&self, mut video: Video) -> Video {
        let events = video.take_events();
        self.videos
            .write()
            .await
            .insert(video.id().clone(), video.clone());

        for event in events {
            let event_type = event.event_type();
            if let Err(err) = self.events.publish(event).await {
                warn!(
                    video_id = %video.id(),
                    event_type,
                    error = %err,
                    "failed to publish video event"
                );
            }
        }
        video
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create(&self, video: Video) -> anyhow::Result<Video> {
        if self.videos.read().await.contains_key(video.id()) {
            anyhow::bail!("video {} already exists", video.id());
        }
        Ok(self.save(video).await)
    }

    async fn update(&self, video: Video) -> anyhow::Result<Video> {
        Ok(self.save(video).await)
    }

    async fn find_by_id(&self, id: &VideoID) -> anyhow::Result<Option<Video>> {
        Ok(self.videos.read().await.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &VideoID) -> anyhow::Result<()> {
        self.videos.write().await.remove(id);
        Ok(())
    }

    async fn exists_by_id(&self, id: &VideoID) -> anyhow::Result<bool> {
        Ok(self.videos.read().await.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::{AudioVideoMedia, VideoDetails, VideoEvent};
    use crate::infrastructure::event_bus::InProcEventBus;

    struct Unreachable;

    #[async_trait]
    impl EventPublisher for Unreachable {
        async fn publish(&self, _event: VideoEvent) -> anyhow::Result<()> {
            anyhow::bail!("broker down")
        }
    }

    fn video_with_media() -> Video {
        let mut video = Video::new_video(VideoDetails::default());
        video.update_video_media(Some(AudioVideoMedia::with(
            "abc",
            "v.mp4",
            "raw/v.mp4",
        )));
        video
    }

    #[tokio::test]
    async fn create_drains_and_publishes_events() {
        let bus = Arc::new(InProcEventBus::new(8));
        let mut events = bus.subscribe();
        let repository = InMemoryVideoRepository::new(bus.clone());

        let stored = repository.create(video_with_media()).await.unwrap();

        assert!(stored.pending_events().is_empty());
        let published = events.recv().await.unwrap();
        assert_eq!(published.event_type(), "media_created");

        let loaded = repository.find_by_id(stored.id()).await.unwrap().unwrap();
        assert!(loaded.pending_events().is_empty());
        assert!(repository.exists_by_id(stored.id()).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected() {
        let repository =
            InMemoryVideoRepository::new(Arc::new(InProcEventBus::default()));
        let video = Video::new_video(VideoDetails::default());

        repository.create(video.clone()).await.unwrap();
        assert!(repository.create(video).await.is_err());
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_write() {
        let repository = InMemoryVideoRepository::new(Arc::new(Unreachable));
        let stored = repository.create(video_with_media()).await.unwrap();

        assert!(repository.exists_by_id(stored.id()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_video() {
        let repository =
            InMemoryVideoRepository::new(Arc::new(InProcEventBus::default()));
        let stored = repository
            .create(Video::new_video(VideoDetails::default()))
            .await
            .unwrap();

        repository.delete_by_id(stored.id()).await.unwrap();
        assert!(repository.find_by_id(stored.id()).await.unwrap().is_none());
        assert!(repository.is_empty().await);
    }
}
