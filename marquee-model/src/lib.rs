//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod media_type;
pub mod prelude;
pub mod rating;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CastMemberID, CategoryID, GenreID, VideoID, unique_id};
pub use media_type::{MediaStatus, VideoMediaType};
pub use rating::Rating;
