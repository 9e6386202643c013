use std::fmt;

use marquee_model::VideoMediaType;
use sha2::{Digest, Sha256};

/// Raw uploaded bytes plus the metadata needed to store them.
#[derive(Clone, PartialEq, Eq)]
pub struct Resource {
    checksum: String,
    content: Vec<u8>,
    content_type: String,
    name: String,
}

impl Resource {
    pub fn with(
        checksum: impl Into<String>,
        content: Vec<u8>,
        content_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            content,
            content_type: content_type.into(),
            name: name.into(),
        }
    }

    /// Build a resource whose checksum is the hex SHA-256 of `content`.
    pub fn from_content(
        content: Vec<u8>,
        content_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let checksum = checksum_of(&content);
        Self::with(checksum, content, content_type, name)
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("checksum", &self.checksum)
            .field("content_len", &self.content.len())
            .field("content_type", &self.content_type)
            .field("name", &self.name)
            .finish()
    }
}

pub fn checksum_of(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

/// A resource tagged with the slot it is destined for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResource {
    media_type: VideoMediaType,
    resource: Resource,
}

impl VideoResource {
    pub fn with(media_type: VideoMediaType, resource: Resource) -> Self {
        Self {
            media_type,
            resource,
        }
    }

    pub fn media_type(&self) -> VideoMediaType {
        self.media_type
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn into_resource(self) -> Resource {
        self.resource
    }
}
