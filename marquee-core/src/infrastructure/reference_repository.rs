use std::collections::HashSet;
use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::references::ReferenceRepository;

/// Process-local set of known ids for one reference kind.
#[derive(Debug)]
pub struct InMemoryReferenceRepository<Id> {
    ids: RwLock<HashSet<Id>>,
}

impl<Id> Default for InMemoryReferenceRepository<Id> {
    fn default() -> Self {
        Self {
            ids: RwLock::new(HashSet::new()),
        }
    }
}

impl<Id> InMemoryReferenceRepository<Id>
where
    Id: Eq + Hash,
{
    pub fn with_ids(ids: impl IntoIterator<Item = Id>) -> Self {
        Self {
            ids: RwLock::new(ids.into_iter().collect()),
        }
    }

    pub async fn insert(&self, id: Id) -> bool {
        self.ids.write().await.insert(id)
    }

    pub async fn remove(&self, id: &Id) -> bool {
        self.ids.write().await.remove(id)
    }
}

#[async_trait]
impl<Id> ReferenceRepository<Id> for InMemoryReferenceRepository<Id>
where
    Id: Clone + Eq + Hash + Send + Sync + 'static,
{
    async fn exists_by_ids(&self, ids: &[Id]) -> anyhow::Result<Vec<Id>> {
        let known = self.ids.read().await;
        Ok(ids.iter().filter(|id| known.contains(id)).cloned().collect())
    }
}
