//! File-based State Storage Adapter
//!
//! Stores each named record as one JSON file under a base directory, so a
//! session's state survives restarts and stays easy to inspect.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{StateStorage, StateStorageError};

/// File-based storage for analysis records.
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    base_path: PathBuf,
}

impl FileStateStorage {
    /// Creates a file storage rooted at a base directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

#[async_trait]
impl StateStorage for FileStateStorage {
    async fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StateStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(value).map_err(|e| {
            StateStorageError::SerializationFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;

        fs::write(self.record_path(key), json)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))
    }

    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StateStorageError> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        let value = serde_json::from_str(&json).map_err(|e| {
            StateStorageError::DeserializationFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Some(value))
    }

    async fn exists(&self, key: &str) -> Result<bool, StateStorageError> {
        Ok(self.record_path(key).exists())
    }

    async fn delete(&self, key: &str) -> Result<(), StateStorageError> {
        let path = self.record_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| StateStorageError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}
