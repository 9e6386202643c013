use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use marquee_model::{
    CastMemberID, CategoryID, GenreID, Rating, VideoID, VideoMediaType,
};

use super::events::VideoEvent;
use super::media::{AudioVideoMedia, ImageMedia};
use super::validator::VideoValidator;
use crate::domain::validation::{Validate, ValidationHandler};
use crate::error::Result;

/// Descriptive attributes of a video, shared by construction and `update`.
///
/// Required attributes are optional here so that incomplete input can be
/// held by the aggregate and reported by validation rather than rejected at
/// construction time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDetails {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Calendar year of the launch
    pub launched_at: Option<i32>,
    /// Runtime in minutes
    pub duration: Option<f64>,
    pub opened: Option<bool>,
    pub published: Option<bool>,
    pub rating: Option<Rating>,
    pub categories: HashSet<CategoryID>,
    pub genres: HashSet<GenreID>,
    pub cast_members: HashSet<CastMemberID>,
}

/// Catalog entry for a single video and its attached media.
#[derive(Debug, Clone)]
pub struct Video {
    id: VideoID,
    details: VideoDetails,
    video: Option<AudioVideoMedia>,
    trailer: Option<AudioVideoMedia>,
    banner: Option<ImageMedia>,
    thumbnail: Option<ImageMedia>,
    thumbnail_half: Option<ImageMedia>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: Vec<VideoEvent>,
}

impl Video {
    pub fn new_video(details: VideoDetails) -> Self {
        let now = Utc::now();
        Self {
            id: VideoID::unique(),
            details,
            video: None,
            trailer: None,
            banner: None,
            thumbnail: None,
            thumbnail_half: None,
            created_at: now,
            updated_at: now,
            events: Vec::new(),
        }
    }

    /// Replace every descriptive attribute.
    pub fn update(&mut self, details: VideoDetails) -> &mut Self {
        self.details = details;
        self.touch();
        self
    }

    pub fn update_video_media(
        &mut self,
        media: Option<AudioVideoMedia>,
    ) -> &mut Self {
        if let Some(media) = &media {
            self.register_media_created(media);
        }
        self.video = media;
        self.touch();
        self
    }

    pub fn update_trailer_media(
        &mut self,
        media: Option<AudioVideoMedia>,
    ) -> &mut Self {
        if let Some(media) = &media {
            self.register_media_created(media);
        }
        self.trailer = media;
        self.touch();
        self
    }

    pub fn update_banner_media(&mut self, media: Option<ImageMedia>) -> &mut Self {
        self.banner = media;
        self.touch();
        self
    }

    pub fn update_thumbnail_media(
        &mut self,
        media: Option<ImageMedia>,
    ) -> &mut Self {
        self.thumbnail = media;
        self.touch();
        self
    }

    pub fn update_thumbnail_half_media(
        &mut self,
        media: Option<ImageMedia>,
    ) -> &mut Self {
        self.thumbnail_half = media;
        self.touch();
        self
    }

    /// Mark the asset in `slot` as being encoded.
    ///
    /// Status transitions replace the slot's descriptor without registering
    /// a new `MediaCreated` event. Returns `false` when `slot` is not an
    /// audio/video slot or holds nothing.
    pub fn processing(&mut self, slot: VideoMediaType) -> bool {
        self.transition(slot, AudioVideoMedia::processing)
    }

    pub fn completed(
        &mut self,
        slot: VideoMediaType,
        encoded_location: &str,
    ) -> bool {
        self.transition(slot, |media| media.completed(encoded_location))
    }

    pub fn failed(&mut self, slot: VideoMediaType) -> bool {
        self.transition(slot, AudioVideoMedia::failed)
    }

    fn transition(
        &mut self,
        slot: VideoMediaType,
        next: impl FnOnce(&AudioVideoMedia) -> AudioVideoMedia,
    ) -> bool {
        let current = match slot {
            VideoMediaType::Video => &mut self.video,
            VideoMediaType::Trailer => &mut self.trailer,
            _ => return false,
        };
        let Some(media) = current.as_ref() else {
            return false;
        };
        *current = Some(next(media));
        self.touch();
        true
    }

    /// Audio/video slot whose current descriptor has `media_id`.
    pub fn audio_video_slot_of(&self, media_id: &str) -> Option<VideoMediaType> {
        if self.video.as_ref().is_some_and(|m| m.id() == media_id) {
            Some(VideoMediaType::Video)
        } else if self.trailer.as_ref().is_some_and(|m| m.id() == media_id) {
            Some(VideoMediaType::Trailer)
        } else {
            None
        }
    }

    fn register_media_created(&mut self, media: &AudioVideoMedia) {
        self.events.push(VideoEvent::media_created(
            self.id.as_str(),
            media.raw_location(),
        ));
    }

    // updated_at must move forward even when the clock has not ticked
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    /// Events registered since the last drain, oldest first.
    pub fn pending_events(&self) -> &[VideoEvent] {
        &self.events
    }

    /// Drain the pending events. Called by the persistence boundary.
    pub fn take_events(&mut self) -> Vec<VideoEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn id(&self) -> &VideoID {
        &self.id
    }

    pub fn details(&self) -> &VideoDetails {
        &self.details
    }

    pub fn title(&self) -> Option<&str> {
        self.details.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    pub fn launched_at(&self) -> Option<i32> {
        self.details.launched_at
    }

    pub fn duration(&self) -> Option<f64> {
        self.details.duration
    }

    pub fn opened(&self) -> Option<bool> {
        self.details.opened
    }

    pub fn published(&self) -> Option<bool> {
        self.details.published
    }

    pub fn rating(&self) -> Option<Rating> {
        self.details.rating
    }

    pub fn categories(&self) -> &HashSet<CategoryID> {
        &self.details.categories
    }

    pub fn genres(&self) -> &HashSet<GenreID> {
        &self.details.genres
    }

    pub fn cast_members(&self) -> &HashSet<CastMemberID> {
        &self.details.cast_members
    }

    pub fn video(&self) -> Option<&AudioVideoMedia> {
        self.video.as_ref()
    }

    pub fn trailer(&self) -> Option<&AudioVideoMedia> {
        self.trailer.as_ref()
    }

    pub fn banner(&self) -> Option<&ImageMedia> {
        self.banner.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&ImageMedia> {
        self.thumbnail.as_ref()
    }

    pub fn thumbnail_half(&self) -> Option<&ImageMedia> {
        self.thumbnail_half.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Validate for Video {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<()> {
        VideoValidator::new(self).validate(handler)
    }
}

impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Video {}
