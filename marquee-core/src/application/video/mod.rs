//! Video use cases.

pub mod create;
pub mod delete;
pub mod get;
pub mod media;
pub mod media_upload;
pub mod references;
pub mod update;

#[cfg(test)]
pub(crate) mod test_support;

pub use create::{
    CreateVideoCommand, CreateVideoOutput, CreateVideoUseCase,
    DefaultCreateVideoUseCase,
};
pub use delete::{DefaultDeleteVideoUseCase, DeleteVideoUseCase};
pub use get::{
    AudioVideoMediaOutput, DefaultGetVideoByIdUseCase, GetVideoByIdUseCase,
    ImageMediaOutput, VideoOutput,
};
pub use media::{
    DefaultGetMediaUseCase, DefaultUpdateMediaStatusUseCase, GetMediaCommand,
    GetMediaUseCase, MediaOutput, UpdateMediaStatusCommand,
    UpdateMediaStatusUseCase,
};
pub use media_upload::MediaResources;
pub use references::validate_references;
pub use update::{
    DefaultUpdateVideoUseCase, UpdateVideoCommand, UpdateVideoOutput,
    UpdateVideoUseCase,
};
