use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    ENV_CONFIG_PATH, ENV_EVENT_CHANNEL_CAPACITY, ENV_LOG, ENV_STORAGE_BACKEND,
    ENV_STORAGE_ROOT,
};
use crate::util::{non_empty_var, parse_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub storage: FileStorageConfig,
    #[serde(default)]
    pub events: FileEventsConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileEventsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_capacity: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Snapshot of the `MARQUEE_*` environment variables.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub storage_backend: Option<String>,
    pub storage_root: Option<PathBuf>,
    pub event_channel_capacity: Option<usize>,
    pub log_filter: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(ENV_CONFIG_PATH).map(PathBuf::from),
            storage_backend: non_empty_var(ENV_STORAGE_BACKEND),
            storage_root: non_empty_var(ENV_STORAGE_ROOT).map(PathBuf::from),
            event_channel_capacity: parse_var(ENV_EVENT_CHANNEL_CAPACITY),
            log_filter: non_empty_var(ENV_LOG),
        }
    }
}
