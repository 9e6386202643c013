//! Key/value blob storage used by the media gateway.
//!
//! Keys are `/` separated paths such as `videoId-<id>/type-VIDEO`.

mod local;
mod memory;

use async_trait::async_trait;

use crate::domain::video::Resource;

pub use local::LocalStorageService;
pub use memory::InMemoryStorageService;

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Store `resource` under `key`, replacing any previous value.
    async fn store(&self, key: &str, resource: Resource) -> anyhow::Result<()>;

    async fn get(&self, key: &str) -> anyhow::Result<Option<Resource>>;

    /// Keys starting with `prefix`, sorted.
    async fn list(&self, prefix: &str) -> anyhow::Result<Vec<String>>;

    /// Remove every listed key. Unknown keys are ignored.
    async fn delete_all(&self, keys: &[String]) -> anyhow::Result<()>;
}
