//! Snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! wiring use cases or adapters.

pub use super::error::ModelError;
pub use super::ids::{CastMemberID, CategoryID, GenreID, VideoID};
pub use super::media_type::{MediaStatus, VideoMediaType};
pub use super::rating::Rating;
