use std::sync::Arc;

use anyhow::Context;
use marquee_config::{Config, ConfigWarnings, StorageBackend, StorageConfig};
use marquee_core::catalog::VideoCatalog;
use marquee_core::infrastructure::{
    InMemoryStorageService, LocalStorageService, StorageService,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Logs go to stderr so command output on stdout stays machine readable.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn report_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }
}

pub async fn build_storage(
    config: &StorageConfig,
) -> anyhow::Result<Arc<dyn StorageService>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("using in-memory media storage");
            Ok(Arc::new(InMemoryStorageService::new()))
        }
        StorageBackend::Local => {
            let root = config
                .root
                .clone()
                .context("local storage requires a root directory")?;
            tokio::fs::create_dir_all(&root).await.with_context(|| {
                format!("failed to create storage root {}", root.display())
            })?;
            info!(root = %root.display(), "using local media storage");
            Ok(Arc::new(LocalStorageService::new(root)))
        }
    }
}

pub async fn build_catalog(config: &Config) -> anyhow::Result<VideoCatalog> {
    let storage = build_storage(&config.storage).await?;
    Ok(VideoCatalog::in_memory(
        storage,
        config.events.channel_capacity,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_backend_creates_its_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("nested").join("media");

        build_storage(&StorageConfig {
            backend: StorageBackend::Local,
            root: Some(root.clone()),
        })
        .await
        .unwrap();

        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn local_backend_without_root_is_rejected() {
        let err = build_storage(&StorageConfig {
            backend: StorageBackend::Local,
            root: None,
        })
        .await
        .err()
        .unwrap();

        assert!(err.to_string().contains("root directory"));
    }
}
