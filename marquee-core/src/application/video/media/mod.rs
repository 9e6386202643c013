pub mod get;
pub mod update_status;

pub use get::{
    DefaultGetMediaUseCase, GetMediaCommand, GetMediaUseCase, MediaOutput,
};
pub use update_status::{
    DefaultUpdateMediaStatusUseCase, UpdateMediaStatusCommand,
    UpdateMediaStatusUseCase,
};
