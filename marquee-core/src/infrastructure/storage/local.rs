use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use super::StorageService;
use crate::domain::video::Resource;

const META_SUFFIX: &str = ".meta.json";

/// Sidecar written next to every blob.
#[derive(Debug, Serialize, Deserialize)]
struct BlobMeta {
    checksum: String,
    content_type: String,
    name: String,
}

/// File-backed storage rooted at a directory. Each key maps to a blob file
/// plus a `.meta.json` sidecar holding checksum, content type and name.
#[derive(Clone, Debug)]
pub struct LocalStorageService {
    root: PathBuf,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> anyhow::Result<PathBuf> {
        let relative = Path::new(key);
        let valid = !key.is_empty()
            && !key.ends_with(META_SUFFIX)
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !valid {
            bail!("invalid storage key: {key:?}");
        }
        Ok(self.root.join(relative))
    }

    async fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
        let tmp = path.with_extension(format!("tmp-{}", Uuid::new_v4().simple()));

        let mut file = tokio::fs::File::create(&tmp)
            .await
            .with_context(|| format!("failed to create temp blob {tmp:?}"))?;
        file.write_all(bytes)
            .await
            .with_context(|| format!("failed to write temp blob {tmp:?}"))?;
        file.flush()
            .await
            .with_context(|| format!("failed to flush temp blob {tmp:?}"))?;
        drop(file);

        tokio::fs::rename(&tmp, path)
            .await
            .with_context(|| format!("failed to move blob {tmp:?} -> {path:?}"))
    }

    fn key_for(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

fn meta_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(META_SUFFIX);
    PathBuf::from(raw)
}

async fn remove_if_present(path: &Path) -> anyhow::Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("failed to remove {path:?}"))
        }
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn store(&self, key: &str, resource: Resource) -> anyhow::Result<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {parent:?}"))?;
        }

        let meta = serde_json::to_vec(&BlobMeta {
            checksum: resource.checksum().to_string(),
            content_type: resource.content_type().to_string(),
            name: resource.name().to_string(),
        })?;
        Self::write_atomic(&meta_path(&path), &meta).await?;
        Self::write_atomic(&path, resource.content()).await
    }

    async fn get(&self, key: &str) -> anyhow::Result<Option<Resource>> {
        let path = self.path_for(key)?;
        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read blob {path:?}"));
            }
        };

        let meta_file = meta_path(&path);
        let raw_meta = tokio::fs::read(&meta_file)
            .await
            .with_context(|| format!("failed to read sidecar {meta_file:?}"))?;
        let meta: BlobMeta = serde_json::from_slice(&raw_meta)
            .with_context(|| format!("corrupt sidecar {meta_file:?}"))?;

        Ok(Some(Resource::with(
            meta.checksum,
            content,
            meta.content_type,
            meta.name,
        )))
    }

    async fn list(&self, prefix: &str) -> anyhow::Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("failed to list {dir:?}"));
                }
            };

            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    pending.push(path);
                    continue;
                }
                let Some(key) = self.key_for(&path) else {
                    continue;
                };
                if key.ends_with(META_SUFFIX) || key.contains(".tmp-") {
                    continue;
                }
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn delete_all(&self, keys: &[String]) -> anyhow::Result<()> {
        for key in keys {
            let path = self.path_for(key)?;
            remove_if_present(&path).await?;
            remove_if_present(&meta_path(&path)).await?;
        }
        Ok(())
    }
}
