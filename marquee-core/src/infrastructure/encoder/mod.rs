//! Inbound messages from the external video encoder.

pub mod listener;
pub mod models;

pub use listener::VideoEncoderListener;
pub use models::{
    VideoEncoderCompleted, VideoEncoderError, VideoEncoderResult, VideoMessage,
    VideoMetadata,
};
