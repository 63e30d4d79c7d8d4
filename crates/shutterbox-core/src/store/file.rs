//! File-backed key-value store.
//!
//! Each key is stored as `<key>.json` under the store's data directory,
//! one file per entry. Writes replace the whole file, so individual calls
//! are atomic with respect to each other but nothing coordinates a
//! read-modify-write across calls.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::{KeyValueStore, StoreError};

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir`, creating the directory if
    /// needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.entry_path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        fs::write(self.entry_path(key), value).await?;
        debug!(key, "Stored value");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.entry_path(key)).await {
            Ok(()) => {
                debug!(key, "Deleted value");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, FileStore) {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path()).unwrap();
        (tmp, store)
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let (_tmp, store) = test_store();
        assert!(store.get("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let (_tmp, store) = test_store();

        store.set("slot", b"{\"id\":\"1\"}").await.unwrap();
        let value = store.get("slot").await.unwrap().unwrap();
        assert_eq!(value, b"{\"id\":\"1\"}");
    }

    #[tokio::test]
    async fn set_replaces_existing_value() {
        let (_tmp, store) = test_store();

        store.set("slot", b"old").await.unwrap();
        store.set("slot", b"new").await.unwrap();
        assert_eq!(store.get("slot").await.unwrap().unwrap(), b"new");
    }

    #[tokio::test]
    async fn delete_removes_value() {
        let (_tmp, store) = test_store();

        store.set("slot", b"value").await.unwrap();
        store.delete("slot").await.unwrap();
        assert!(store.get("slot").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_key_is_ok() {
        let (_tmp, store) = test_store();
        store.delete("absent").await.unwrap();
    }

    #[tokio::test]
    async fn values_survive_a_new_store_over_the_same_dir() {
        let tmp = TempDir::new().unwrap();

        let store = FileStore::new(tmp.path()).unwrap();
        store.set("slot", b"persisted").await.unwrap();
        drop(store);

        let reopened = FileStore::new(tmp.path()).unwrap();
        assert_eq!(reopened.get("slot").await.unwrap().unwrap(), b"persisted");
    }
}
