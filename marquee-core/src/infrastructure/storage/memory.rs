use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StorageService;
use crate::domain::video::Resource;

#[derive(Debug, Default)]
pub struct InMemoryStorageService {
    entries: RwLock<BTreeMap<String, Resource>>,
}

impl InMemoryStorageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl StorageService for InMemoryStorageService {
    async fn store(&self, key: &str, resource: Resource) -> anyhow::Result<()> {
        self.entries.write().await.insert(key.to_string(), resource);
        Ok(())
    }

    async fn get(&self, key: &str) -> anyhow::Result<Option<Resource>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn list(&self, prefix: &str) -> anyhow::Result<Vec<String>> {
        Ok(self
            .entries
            .read()
            .await
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn delete_all(&self, keys: &[String]) -> anyhow::Result<()> {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str) -> Resource {
        Resource::from_content(name.as_bytes().to_vec(), "video/mp4", name)
    }

    #[tokio::test]
    async fn stores_lists_and_deletes_by_prefix() {
        let storage = InMemoryStorageService::new();
        storage.store("videoId-1/type-VIDEO", resource("a")).await.unwrap();
        storage.store("videoId-1/type-BANNER", resource("b")).await.unwrap();
        storage.store("videoId-2/type-VIDEO", resource("c")).await.unwrap();

        let keys = storage.list("videoId-1/").await.unwrap();
        assert_eq!(keys, vec!["videoId-1/type-BANNER", "videoId-1/type-VIDEO"]);

        storage.delete_all(&keys).await.unwrap();
        assert_eq!(storage.len().await, 1);
        assert!(storage.get("videoId-1/type-VIDEO").await.unwrap().is_none());
        assert_eq!(
            storage.get("videoId-2/type-VIDEO").await.unwrap().unwrap().name(),
            "c"
        );

        storage.clear().await;
        assert!(storage.is_empty().await);
    }
}
