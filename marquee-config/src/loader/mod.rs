pub mod error;

use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};

use tracing::debug;

use self::error::ConfigLoadError;
use crate::constants::{
    DEFAULT_EVENT_CHANNEL_CAPACITY, DEFAULT_LOG_FILTER, DEFAULT_STORAGE_ROOT,
};
use crate::models::{
    Config, ConfigMetadata, EventsConfig, LoggingConfig, StorageBackend,
    StorageConfig,
    sources::{EnvConfig, FileConfig},
};
use crate::util::non_blank;
use crate::validation::{self, ConfigWarnings};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Seed the environment from `.env`, then resolve the configuration.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.resolve(EnvConfig::gather(), env_file_loaded)
    }

    /// Resolve against an already gathered environment snapshot.
    ///
    /// Does not read `.env` or the process environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        self.resolve(env, false)
    }

    fn resolve(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        debug!(
            config_path = ?config_path,
            env_file_loaded,
            "resolving configuration"
        );

        let (config, warnings) =
            compose_config(file_config, env, config_path, env_file_loaded)?;

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = if let Some(path) = &self.options.config_path {
            (path.clone(), true)
        } else if let Some(path) = &env.config_path {
            (path.clone(), true)
        } else if let Some(path) = DEFAULT_CONFIG_LOCATIONS
            .iter()
            .find(|candidate| candidate.exists())
        {
            (path.clone(), false)
        } else {
            return Ok((None, None));
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
                path: path.clone(),
                source,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

/// Merge environment over file over defaults, then apply guard rails.
fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if config_path.is_none() {
        warnings.push_with_hint(
            "No marquee.toml detected; using environment variables and defaults",
            "Create marquee.toml or point MARQUEE_CONFIG_PATH at a configuration file",
        );
    }

    let FileConfig {
        storage: file_storage,
        events: file_events,
        logging: file_logging,
    } = file_config.unwrap_or_default();

    let backend = match non_blank(env.storage_backend)
        .or_else(|| non_blank(file_storage.backend))
    {
        Some(raw) => raw.parse::<StorageBackend>().map_err(|value| {
            ConfigLoadError::InvalidStorageBackend { value }
        })?,
        None => StorageBackend::Memory,
    };

    let mut root = env.storage_root.or(file_storage.root);
    if backend == StorageBackend::Local && root.is_none() {
        warnings.push_with_hint(
            format!(
                "Local storage selected without a root; using {DEFAULT_STORAGE_ROOT}"
            ),
            "Set MARQUEE_STORAGE_ROOT or storage.root",
        );
        root = Some(PathBuf::from(DEFAULT_STORAGE_ROOT));
    }

    let channel_capacity = env
        .event_channel_capacity
        .or(file_events.channel_capacity)
        .unwrap_or(DEFAULT_EVENT_CHANNEL_CAPACITY);

    let filter = non_blank(env.log_filter)
        .or_else(|| non_blank(file_logging.filter))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let config = Config {
        storage: StorageConfig { backend, root },
        events: EventsConfig { channel_capacity },
        logging: LoggingConfig { filter },
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    let guard_warnings = validation::apply_guard_rails(&config)?;
    warnings.extend(guard_warnings);

    Ok((config, warnings))
}
