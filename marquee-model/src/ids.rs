use crate::error::ModelError;
use uuid::Uuid;

/// Generates a fresh opaque identifier: a time-ordered UUID rendered without
/// hyphens.
pub fn unique_id() -> String {
    Uuid::now_v7().simple().to_string()
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Allocates a new, never-before-seen identifier.
            pub fn unique() -> Self {
                Self(unique_id())
            }

            /// Wraps an existing identifier without validation.
            pub fn from_string(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Wraps an existing identifier, rejecting blank input.
            pub fn parse(value: impl Into<String>) -> Result<Self, ModelError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ModelError::InvalidId(format!(
                        "{} cannot be empty",
                        $label
                    )));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

opaque_id!(
    /// Identity of a video aggregate
    VideoID,
    "Video ID"
);

opaque_id!(
    /// Foreign reference to a category aggregate
    CategoryID,
    "Category ID"
);

opaque_id!(
    /// Foreign reference to a genre aggregate
    GenreID,
    "Genre ID"
);

opaque_id!(
    /// Foreign reference to a cast member aggregate
    CastMemberID,
    "Cast member ID"
);
