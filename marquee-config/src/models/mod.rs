pub mod sources;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fully resolved configuration for a catalog process.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub events: EventsConfig,
    pub logging: LoggingConfig,
    #[serde(skip)]
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Only meaningful for [`StorageBackend::Local`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

/// Where uploaded media bytes are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Local,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Local => "local",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => Ok(StorageBackend::Memory),
            "local" | "fs" | "filesystem" => Ok(StorageBackend::Local),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventsConfig {
    /// Buffered events per subscriber before slow readers start lagging.
    pub channel_capacity: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
