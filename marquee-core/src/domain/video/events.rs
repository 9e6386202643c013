use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Facts recorded by the video aggregate, published once the aggregate has
/// been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VideoEvent {
    /// An audio/video asset was attached and awaits encoding.
    MediaCreated {
        resource_id: String,
        file_path: String,
        occurred_on: DateTime<Utc>,
    },
}

impl VideoEvent {
    pub fn media_created(
        resource_id: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self::MediaCreated {
            resource_id: resource_id.into(),
            file_path: file_path.into(),
            occurred_on: Utc::now(),
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MediaCreated { .. } => "media_created",
        }
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            Self::MediaCreated { occurred_on, .. } => *occurred_on,
        }
    }
}

/// Outbound channel for video events.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: VideoEvent) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_created_serializes_with_type_tag() {
        let event = VideoEvent::media_created("video-1", "videoId-1/type-VIDEO");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "media_created");
        assert_eq!(json["resource_id"], "video-1");
        assert_eq!(json["file_path"], "videoId-1/type-VIDEO");
        assert!(json["occurred_on"].is_string());

        let back: VideoEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
