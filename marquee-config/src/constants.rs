pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Capacities above this are accepted but flagged.
pub const LARGE_EVENT_CHANNEL_CAPACITY: usize = 1 << 20;

pub const DEFAULT_LOG_FILTER: &str = "info,marquee_core=debug";

pub const DEFAULT_STORAGE_ROOT: &str = "data/media";

pub const ENV_CONFIG_PATH: &str = "MARQUEE_CONFIG_PATH";
pub const ENV_STORAGE_BACKEND: &str = "MARQUEE_STORAGE_BACKEND";
pub const ENV_STORAGE_ROOT: &str = "MARQUEE_STORAGE_ROOT";
pub const ENV_EVENT_CHANNEL_CAPACITY: &str = "MARQUEE_EVENT_CHANNEL_CAPACITY";
pub const ENV_LOG: &str = "MARQUEE_LOG";
