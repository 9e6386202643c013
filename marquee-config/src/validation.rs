use std::path::PathBuf;

use thiserror::Error;

use crate::constants::LARGE_EVENT_CHANNEL_CAPACITY;
use crate::models::{Config, StorageBackend};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("event channel capacity must be greater than zero")]
    ZeroEventCapacity,
    #[error("storage root {path} exists but is not a directory")]
    StorageRootNotDirectory { path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.events.channel_capacity == 0 {
        return Err(ConfigGuardRailError::ZeroEventCapacity);
    }
    if config.events.channel_capacity > LARGE_EVENT_CHANNEL_CAPACITY {
        warnings.push_with_hint(
            format!(
                "Event channel capacity {} is unusually large; every subscriber buffers that many events",
                config.events.channel_capacity
            ),
            "Lower MARQUEE_EVENT_CHANNEL_CAPACITY unless subscribers are expected to fall far behind",
        );
    }

    match (config.storage.backend, config.storage.root.as_ref()) {
        (StorageBackend::Local, Some(root)) => {
            if root.exists() && !root.is_dir() {
                return Err(ConfigGuardRailError::StorageRootNotDirectory {
                    path: root.clone(),
                });
            }
            if root.is_relative() {
                warnings.push_with_hint(
                    format!(
                        "Storage root {} is relative to the working directory",
                        root.display()
                    ),
                    "Set MARQUEE_STORAGE_ROOT to an absolute path",
                );
            }
        }
        (StorageBackend::Memory, Some(root)) => {
            warnings.push(format!(
                "Storage root {} is ignored by the memory backend",
                root.display()
            ));
        }
        _ => {}
    }

    Ok(warnings)
}
