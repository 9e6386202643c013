use marquee_model::{MediaStatus, unique_id};
use serde::{Deserialize, Serialize};

/// Audio/video asset attached to a video slot along with its encoding state.
///
/// Values are immutable: every status transition produces a new descriptor
/// that keeps the same `id`. Two descriptors are equal when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioVideoMedia {
    id: String,
    checksum: String,
    name: String,
    raw_location: String,
    encoded_location: String,
    status: MediaStatus,
}

impl AudioVideoMedia {
    /// Freshly uploaded asset, waiting for the encoder.
    pub fn with(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            id: unique_id(),
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: String::new(),
            status: MediaStatus::Pending,
        }
    }

    pub fn processing(&self) -> Self {
        self.transition(MediaStatus::Processing, String::new())
    }

    pub fn completed(&self, encoded_location: impl Into<String>) -> Self {
        self.transition(MediaStatus::Completed, encoded_location.into())
    }

    pub fn failed(&self) -> Self {
        self.transition(MediaStatus::Error, String::new())
    }

    fn transition(&self, status: MediaStatus, encoded_location: String) -> Self {
        Self {
            status,
            encoded_location,
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_location(&self) -> &str {
        &self.raw_location
    }

    pub fn encoded_location(&self) -> &str {
        &self.encoded_location
    }

    pub fn status(&self) -> MediaStatus {
        self.status
    }
}

impl PartialEq for AudioVideoMedia {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AudioVideoMedia {}

/// Still image attached to a banner or thumbnail slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMedia {
    id: String,
    checksum: String,
    name: String,
    location: String,
}

impl ImageMedia {
    pub fn with(
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: unique_id(),
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AudioVideoMedia {
        AudioVideoMedia::with("abc", "video.mp4", "/videos/raw.mp4")
    }

    #[test]
    fn new_media_is_pending_with_blank_encoded_location() {
        let media = sample();
        assert_eq!(media.status(), MediaStatus::Pending);
        assert!(media.encoded_location().is_empty());
        assert!(!media.id().is_empty());
    }

    #[test]
    fn transitions_keep_identity_and_source_fields() {
        let media = sample();
        let processing = media.processing();
        let completed = processing.completed("/encoded/abc");

        assert_eq!(processing.status(), MediaStatus::Processing);
        assert!(processing.encoded_location().is_empty());
        assert_eq!(completed.status(), MediaStatus::Completed);
        assert_eq!(completed.encoded_location(), "/encoded/abc");
        assert_eq!(completed.id(), media.id());
        assert_eq!(completed.checksum(), "abc");
        assert_eq!(completed.raw_location(), "/videos/raw.mp4");
        assert_eq!(completed, media);
        // source descriptor is untouched
        assert_eq!(media.status(), MediaStatus::Pending);
    }

    #[test]
    fn failed_clears_encoded_location() {
        let failed = sample().completed("/encoded/abc").failed();
        assert_eq!(failed.status(), MediaStatus::Error);
        assert!(failed.encoded_location().is_empty());
    }

    #[test]
    fn equality_is_by_id() {
        let a = sample();
        let b = AudioVideoMedia::with("abc", "video.mp4", "/videos/raw.mp4");
        assert_ne!(a, b);
        assert_eq!(a, a.processing());
    }
}
