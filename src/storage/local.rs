//! Local filesystem storage backend.
//!
//! Each key maps to one file under the root directory. Writes are atomic
//! (write to temp, then rename) so a crash mid-write never leaves a
//! half-written value behind.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::storage::KeyValueStorage;

/// File-per-key storage rooted at a directory.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for LocalStorage {
    async fn read_key(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(key, e)),
        }
    }

    async fn write_key(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path)
            .await
            .map_err(|e| AppError::storage(key, e))?;

        let tmp = path.with_extension("tmp");
        let result: std::io::Result<()> = async {
            let mut file = tokio::fs::File::create(&tmp).await?;
            file.write_all(value.as_bytes()).await?;
            file.flush().await?;
            drop(file);

            tokio::fs::rename(&tmp, &path).await
        }
        .await;

        result.map_err(|e| AppError::storage(key, e))
    }
}
