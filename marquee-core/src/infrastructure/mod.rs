//! Adapters for the ports declared in the domain layer.

pub mod encoder;
pub mod event_bus;
pub mod media_gateway;
pub mod reference_repository;
pub mod storage;
pub mod video_repository;

pub use event_bus::{InProcEventBus, VideoEventStream};
pub use media_gateway::DefaultMediaResourceGateway;
pub use reference_repository::InMemoryReferenceRepository;
pub use storage::{
    InMemoryStorageService, LocalStorageService, StorageService,
};
pub use video_repository::InMemoryVideoRepository;
