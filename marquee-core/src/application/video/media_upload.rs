use marquee_model::{VideoID, VideoMediaType};
use tracing::warn;

use crate::domain::video::{
    AudioVideoMedia, ImageMedia, MediaResourceGateway, Resource, Video,
    VideoResource,
};

/// Raw payloads for the five media slots of a video.
#[derive(Debug, Clone, Default)]
pub struct MediaResources {
    pub video: Option<Resource>,
    pub trailer: Option<Resource>,
    pub banner: Option<Resource>,
    pub thumbnail: Option<Resource>,
    pub thumbnail_half: Option<Resource>,
}

impl MediaResources {
    pub fn is_empty(&self) -> bool {
        self.video.is_none()
            && self.trailer.is_none()
            && self.banner.is_none()
            && self.thumbnail.is_none()
            && self.thumbnail_half.is_none()
    }

    /// Slots that carry a payload, in slot order.
    pub fn slots(&self) -> Vec<VideoMediaType> {
        [
            (VideoMediaType::Video, &self.video),
            (VideoMediaType::Trailer, &self.trailer),
            (VideoMediaType::Banner, &self.banner),
            (VideoMediaType::Thumbnail, &self.thumbnail),
            (VideoMediaType::ThumbnailHalf, &self.thumbnail_half),
        ]
        .into_iter()
        .filter_map(|(slot, resource)| resource.as_ref().map(|_| slot))
        .collect()
    }
}

/// Upload every supplied resource and attach the results to `video`.
///
/// Slots are uploaded concurrently. The aggregate is only mutated once all
/// uploads succeeded, in slot order, so `MediaCreated` events are queued
/// video first then trailer. Slots without a payload keep their current
/// media.
pub(crate) async fn attach_media(
    gateway: &dyn MediaResourceGateway,
    video: &mut Video,
    resources: MediaResources,
) -> anyhow::Result<()> {
    if resources.is_empty() {
        return Ok(());
    }

    let id = video.id().clone();
    let MediaResources {
        video: main,
        trailer,
        banner,
        thumbnail,
        thumbnail_half,
    } = resources;

    let (main, trailer, banner, thumbnail, thumbnail_half) = futures::try_join!(
        store_audio_video(gateway, &id, VideoMediaType::Video, main),
        store_audio_video(gateway, &id, VideoMediaType::Trailer, trailer),
        store_image(gateway, &id, VideoMediaType::Banner, banner),
        store_image(gateway, &id, VideoMediaType::Thumbnail, thumbnail),
        store_image(
            gateway,
            &id,
            VideoMediaType::ThumbnailHalf,
            thumbnail_half
        ),
    )?;

    if main.is_some() {
        video.update_video_media(main);
    }
    if trailer.is_some() {
        video.update_trailer_media(trailer);
    }
    if banner.is_some() {
        video.update_banner_media(banner);
    }
    if thumbnail.is_some() {
        video.update_thumbnail_media(thumbnail);
    }
    if thumbnail_half.is_some() {
        video.update_thumbnail_half_media(thumbnail_half);
    }
    Ok(())
}

/// Read the stored payload of every slot `resources` is about to replace.
pub(crate) async fn snapshot_media(
    gateway: &dyn MediaResourceGateway,
    id: &VideoID,
    resources: &MediaResources,
) -> anyhow::Result<Vec<(VideoMediaType, Resource)>> {
    let mut previous = Vec::new();
    for slot in resources.slots() {
        if let Some(resource) = gateway.get_resource(id, slot).await? {
            previous.push((slot, resource));
        }
    }
    Ok(previous)
}

/// Put snapshotted payloads back under their slot keys.
///
/// Restoring is best effort; a slot that cannot be written back is logged
/// and the rest are still attempted.
pub(crate) async fn restore_media(
    gateway: &dyn MediaResourceGateway,
    id: &VideoID,
    previous: Vec<(VideoMediaType, Resource)>,
) {
    for (slot, resource) in previous {
        let resource = VideoResource::with(slot, resource);
        let restored = if slot.is_audio_video() {
            gateway.store_audio_video(id, resource).await.map(|_| ())
        } else {
            gateway.store_image(id, resource).await.map(|_| ())
        };
        if let Err(err) = restored {
            warn!(
                video_id = %id,
                media_type = %slot,
                error = %err,
                "failed to restore media after aborted update"
            );
        }
    }
}

async fn store_audio_video(
    gateway: &dyn MediaResourceGateway,
    id: &VideoID,
    media_type: VideoMediaType,
    resource: Option<Resource>,
) -> anyhow::Result<Option<AudioVideoMedia>> {
    match resource {
        Some(resource) => gateway
            .store_audio_video(id, VideoResource::with(media_type, resource))
            .await
            .map(Some),
        None => Ok(None),
    }
}

async fn store_image(
    gateway: &dyn MediaResourceGateway,
    id: &VideoID,
    media_type: VideoMediaType,
    resource: Option<Resource>,
) -> anyhow::Result<Option<ImageMedia>> {
    match resource {
        Some(resource) => gateway
            .store_image(id, VideoResource::with(media_type, resource))
            .await
            .map(Some),
        None => Ok(None),
    }
}
