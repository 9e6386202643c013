use serde::{Deserialize, Serialize};

/// Result message published by the external video encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoEncoderResult {
    Completed(VideoEncoderCompleted),
    Error(VideoEncoderError),
}

impl VideoEncoderResult {
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEncoderCompleted {
    /// Id of the video the encoded media belongs to
    pub id: String,
    #[serde(rename = "output_bucket_path")]
    pub output_bucket: String,
    pub video: VideoMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub encoded_video_folder: String,
    /// Id of the encoded media descriptor
    pub resource_id: String,
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEncoderError {
    pub message: VideoMessage,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMessage {
    pub resource_id: String,
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_completed_result() {
        let payload = r#"{
            "status": "COMPLETED",
            "id": "video-1",
            "output_bucket_path": "codeflix-encoded",
            "video": {
                "encoded_video_folder": "anyfolder",
                "resource_id": "media-1",
                "file_path": "video.mp4"
            }
        }"#;

        let result = VideoEncoderResult::from_json(payload).unwrap();
        let VideoEncoderResult::Completed(completed) = result else {
            panic!("expected completed result");
        };
        assert_eq!(completed.id, "video-1");
        assert_eq!(completed.output_bucket, "codeflix-encoded");
        assert_eq!(completed.video.encoded_video_folder, "anyfolder");
        assert_eq!(completed.video.resource_id, "media-1");
    }

    #[test]
    fn parses_error_result() {
        let payload = r#"{
            "status": "ERROR",
            "error": "Resource not found",
            "message": {"resource_id": "video-1", "file_path": "video.mp4"}
        }"#;

        let result = VideoEncoderResult::from_json(payload).unwrap();
        assert_eq!(
            result,
            VideoEncoderResult::Error(VideoEncoderError {
                message: VideoMessage {
                    resource_id: "video-1".into(),
                    file_path: "video.mp4".into(),
                },
                error: "Resource not found".into(),
            })
        );
    }

    #[test]
    fn serializes_with_status_tag() {
        let result = VideoEncoderResult::Error(VideoEncoderError {
            message: VideoMessage {
                resource_id: "v".into(),
                file_path: "f".into(),
            },
            error: "boom".into(),
        });
        let json: serde_json::Value =
            serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["status"], "ERROR");
        assert_eq!(json["message"]["resource_id"], "v");
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(
            VideoEncoderResult::from_json(r#"{"status":"PAUSED"}"#).is_err()
        );
    }
}
