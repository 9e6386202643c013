use std::fmt;
use std::sync::Arc;

use marquee_model::{CastMemberID, CategoryID, GenreID};

use crate::application::video::{
    CreateVideoUseCase, DefaultCreateVideoUseCase, DefaultDeleteVideoUseCase,
    DefaultGetMediaUseCase, DefaultGetVideoByIdUseCase,
    DefaultUpdateMediaStatusUseCase, DefaultUpdateVideoUseCase,
    DeleteVideoUseCase, GetMediaUseCase, GetVideoByIdUseCase,
    UpdateMediaStatusUseCase, UpdateVideoUseCase,
};
use crate::domain::video::{MediaResourceGateway, VideoRepository};
use crate::infrastructure::{
    DefaultMediaResourceGateway, InMemoryReferenceRepository,
    InMemoryVideoRepository, InProcEventBus, StorageService,
    encoder::VideoEncoderListener,
};

/// Video use cases wired against process-local adapters.
///
/// Reference ids are seeded through the exposed repositories; media goes to
/// whichever [`StorageService`] the caller supplies.
pub struct VideoCatalog {
    pub categories: Arc<InMemoryReferenceRepository<CategoryID>>,
    pub genres: Arc<InMemoryReferenceRepository<GenreID>>,
    pub cast_members: Arc<InMemoryReferenceRepository<CastMemberID>>,
    pub videos: Arc<InMemoryVideoRepository>,
    pub events: Arc<InProcEventBus>,
    pub create_video: Arc<dyn CreateVideoUseCase>,
    pub update_video: Arc<dyn UpdateVideoUseCase>,
    pub get_video: Arc<dyn GetVideoByIdUseCase>,
    pub delete_video: Arc<dyn DeleteVideoUseCase>,
    pub update_media_status: Arc<dyn UpdateMediaStatusUseCase>,
    pub get_media: Arc<dyn GetMediaUseCase>,
    pub encoder_listener: Arc<VideoEncoderListener>,
}

impl fmt::Debug for VideoCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoCatalog")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl VideoCatalog {
    pub fn in_memory(
        storage: Arc<dyn StorageService>,
        event_capacity: usize,
    ) -> Self {
        let categories: Arc<InMemoryReferenceRepository<CategoryID>> =
            Arc::new(InMemoryReferenceRepository::default());
        let genres: Arc<InMemoryReferenceRepository<GenreID>> =
            Arc::new(InMemoryReferenceRepository::default());
        let cast_members: Arc<InMemoryReferenceRepository<CastMemberID>> =
            Arc::new(InMemoryReferenceRepository::default());
        let events = Arc::new(InProcEventBus::new(event_capacity));
        let videos = Arc::new(InMemoryVideoRepository::new(events.clone()));
        let media: Arc<dyn MediaResourceGateway> =
            Arc::new(DefaultMediaResourceGateway::new(storage));
        let video_store: Arc<dyn VideoRepository> = videos.clone();

        let update_media_status: Arc<dyn UpdateMediaStatusUseCase> = Arc::new(
            DefaultUpdateMediaStatusUseCase::new(video_store.clone()),
        );

        Self {
            create_video: Arc::new(DefaultCreateVideoUseCase::new(
                categories.clone(),
                genres.clone(),
                cast_members.clone(),
                video_store.clone(),
                media.clone(),
            )),
            update_video: Arc::new(DefaultUpdateVideoUseCase::new(
                categories.clone(),
                genres.clone(),
                cast_members.clone(),
                video_store.clone(),
                media.clone(),
            )),
            get_video: Arc::new(DefaultGetVideoByIdUseCase::new(
                video_store.clone(),
            )),
            delete_video: Arc::new(DefaultDeleteVideoUseCase::new(
                video_store,
                media.clone(),
            )),
            get_media: Arc::new(DefaultGetMediaUseCase::new(media)),
            encoder_listener: Arc::new(VideoEncoderListener::new(
                update_media_status.clone(),
            )),
            update_media_status,
            categories,
            genres,
            cast_members,
            videos,
            events,
        }
    }
}
