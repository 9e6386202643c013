use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use marquee_model::MediaStatus;
use tracing::{debug, error};

use super::models::VideoEncoderResult;
use crate::application::video::{
    UpdateMediaStatusCommand, UpdateMediaStatusUseCase,
};
use crate::error::{CatalogError, Result};

/// Translates encoder result messages into media status updates.
pub struct VideoEncoderListener {
    update_media_status: Arc<dyn UpdateMediaStatusUseCase>,
}

impl fmt::Debug for VideoEncoderListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoEncoderListener")
            .field(
                "update_media_status",
                &type_name_of_val(self.update_media_status.as_ref()),
            )
            .finish()
    }
}

impl VideoEncoderListener {
    pub fn new(update_media_status: Arc<dyn UpdateMediaStatusUseCase>) -> Self {
        Self {
            update_media_status,
        }
    }

    pub async fn on_message(&self, payload: &str) -> Result<()> {
        let result = VideoEncoderResult::from_json(payload).map_err(|err| {
            error!(error = %err, "unreadable encoder message");
            CatalogError::InvalidMessage(err.to_string())
        })?;
        self.on_result(result).await
    }

    pub async fn on_result(&self, result: VideoEncoderResult) -> Result<()> {
        match result {
            VideoEncoderResult::Completed(completed) => {
                debug!(
                    video_id = %completed.id,
                    resource_id = %completed.video.resource_id,
                    "encoder completed"
                );
                let video = completed.video;
                self.update_media_status
                    .execute(UpdateMediaStatusCommand::with(
                        MediaStatus::Completed,
                        completed.id,
                        video.resource_id,
                        Some(video.encoded_video_folder),
                        Some(video.file_path),
                    ))
                    .await
            }
            VideoEncoderResult::Error(failure) => {
                error!(
                    resource_id = %failure.message.resource_id,
                    file_path = %failure.message.file_path,
                    error = %failure.error,
                    "encoder reported an error"
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Captured {
        commands: Mutex<Vec<UpdateMediaStatusCommand>>,
    }

    #[async_trait]
    impl UpdateMediaStatusUseCase for Captured {
        async fn execute(&self, command: UpdateMediaStatusCommand) -> Result<()> {
            self.commands.lock().await.push(command);
            Ok(())
        }
    }

    #[tokio::test]
    async fn completed_message_updates_media_status() {
        let captured = Arc::new(Captured::default());
        let listener = VideoEncoderListener::new(captured.clone());

        listener
            .on_message(
                r#"{"status":"COMPLETED","id":"video-1","output_bucket_path":"out",
                    "video":{"encoded_video_folder":"anyfolder",
                    "resource_id":"media-1","file_path":"video.mp4"}}"#,
            )
            .await
            .unwrap();

        let commands = captured.commands.lock().await;
        assert_eq!(
            *commands,
            vec![UpdateMediaStatusCommand::with(
                MediaStatus::Completed,
                "video-1",
                "media-1",
                Some("anyfolder".into()),
                Some("video.mp4".into()),
            )]
        );
    }

    #[tokio::test]
    async fn error_message_is_logged_only() {
        let captured = Arc::new(Captured::default());
        let listener = VideoEncoderListener::new(captured.clone());

        listener
            .on_message(
                r#"{"status":"ERROR","error":"Resource not found",
                    "message":{"resource_id":"video-1","file_path":"video.mp4"}}"#,
            )
            .await
            .unwrap();

        assert!(captured.commands.lock().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_message_is_rejected() {
        let listener = VideoEncoderListener::new(Arc::new(Captured::default()));
        let err = listener.on_message("{not json").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidMessage(_)));
    }
}
