//! Configuration loading for Marquee.
//!
//! Values are resolved from the process environment (optionally seeded from a
//! `.env` file), then an optional TOML file, then built-in defaults. The
//! resulting [`Config`] is checked by [`validation::apply_guard_rails`], which
//! rejects unusable values and reports suspicious ones as [`ConfigWarnings`].
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    Config, ConfigMetadata, EventsConfig, LoggingConfig, StorageBackend,
    StorageConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
