//! File-backed launch snapshot.
//!
//! The snapshot is a pretty-printed [`CachedSnapshot`]. Each write goes to
//! its own uniquely named temp file in the target directory which is then
//! renamed over the target, so a reader either sees the previous snapshot or
//! a complete new one, and overlapping writers never share a temp file.

use async_trait::async_trait;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::debug;

use crate::cache::CachedSnapshot;
use crate::error::StoreError;
use crate::models::RocketLaunch;
use crate::traits::LaunchStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Read the full snapshot envelope, including its timestamp.
    pub async fn load_snapshot(&self) -> Result<Option<CachedSnapshot>, StoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io("read", &self.path, e)),
        };

        let snapshot = serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(snapshot))
    }
}

#[async_trait]
impl LaunchStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Vec<RocketLaunch>>, StoreError> {
        Ok(self.load_snapshot().await?.map(|s| s.launches))
    }

    async fn replace(&self, launches: &[RocketLaunch]) -> Result<(), StoreError> {
        let dir = self.dir().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::io("create directory for", &dir, e))?;

        let snapshot = CachedSnapshot::new(launches.to_vec());
        let json = serde_json::to_vec_pretty(&snapshot).map_err(StoreError::Serialize)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &path, &json))
            .await
            .map_err(|e| {
                StoreError::io("write", &self.path, io::Error::new(io::ErrorKind::Other, e))
            })??;

        debug!(path = %self.path.display(), count = launches.len(), "Launch snapshot written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io("remove", &self.path, e)),
        }
    }
}

/// Write `bytes` to a fresh temp file in `dir` and rename it over `path`.
fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let mut temp =
        NamedTempFile::new_in(dir).map_err(|e| StoreError::io("create temp file in", dir, e))?;
    temp.write_all(bytes)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| StoreError::io("write", temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| StoreError::io("replace", path, e.error))?;
    Ok(())
}
