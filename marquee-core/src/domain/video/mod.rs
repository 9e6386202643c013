//! Video aggregate and the ports it is persisted through.

pub mod aggregate;
pub mod events;
pub mod media;
pub mod repository;
pub mod resource;
pub mod validator;

pub use aggregate::{Video, VideoDetails};
pub use events::{EventPublisher, VideoEvent};
pub use media::{AudioVideoMedia, ImageMedia};
pub use repository::{MediaResourceGateway, VideoRepository};
pub use resource::{Resource, VideoResource, checksum_of};
pub use validator::VideoValidator;
