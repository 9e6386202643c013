use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// The five named attachment points on a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VideoMediaType {
    /// Main feature, transcoded
    Video,
    /// Trailer, transcoded
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl VideoMediaType {
    pub const ALL: [VideoMediaType; 5] = [
        VideoMediaType::Video,
        VideoMediaType::Trailer,
        VideoMediaType::Banner,
        VideoMediaType::Thumbnail,
        VideoMediaType::ThumbnailHalf,
    ];

    /// Slot name used in storage keys
    pub fn name(&self) -> &'static str {
        match self {
            VideoMediaType::Video => "VIDEO",
            VideoMediaType::Trailer => "TRAILER",
            VideoMediaType::Banner => "BANNER",
            VideoMediaType::Thumbnail => "THUMBNAIL",
            VideoMediaType::ThumbnailHalf => "THUMBNAIL_HALF",
        }
    }

    /// Whether this slot holds audio/video content that goes through the
    /// encoder.
    pub fn is_audio_video(&self) -> bool {
        matches!(self, VideoMediaType::Video | VideoMediaType::Trailer)
    }
}

impl Display for VideoMediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VideoMediaType {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ModelError::UnknownMediaType(raw.to_string()))
    }
}

/// Encoding status of an audio/video media slot.
///
/// `Pending` is assigned at upload time; `Completed` and `Error` are terminal
/// from the encoder's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MediaStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Error,
}

impl MediaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaStatus::Pending => "PENDING",
            MediaStatus::Processing => "PROCESSING",
            MediaStatus::Completed => "COMPLETED",
            MediaStatus::Error => "ERROR",
        }
    }
}

impl Display for MediaStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaStatus {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(MediaStatus::Pending),
            "PROCESSING" => Ok(MediaStatus::Processing),
            "COMPLETED" => Ok(MediaStatus::Completed),
            "ERROR" => Ok(MediaStatus::Error),
            _ => Err(ModelError::UnknownMediaStatus(raw.to_string())),
        }
    }
}
