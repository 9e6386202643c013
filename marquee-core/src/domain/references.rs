//! Existence checks against the aggregates a video refers to.
//!
//! Categories, genres and cast members live in their own stores. The video
//! context only needs to know which of a set of ids exist there.

use async_trait::async_trait;
use marquee_model::{CastMemberID, CategoryID, GenreID};

#[async_trait]
pub trait ReferenceRepository<Id>: Send + Sync
where
    Id: Send + Sync + 'static,
{
    /// Subset of `ids` that exists in the store.
    async fn exists_by_ids(&self, ids: &[Id]) -> anyhow::Result<Vec<Id>>;
}

pub type CategoryRepository = dyn ReferenceRepository<CategoryID>;
pub type GenreRepository = dyn ReferenceRepository<GenreID>;
pub type CastMemberRepository = dyn ReferenceRepository<CastMemberID>;
