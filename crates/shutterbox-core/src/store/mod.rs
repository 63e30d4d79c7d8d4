//! Local durable key-value storage.
//!
//! The session manager mirrors the current session to a single slot in a
//! `KeyValueStore`. Two backends are provided:
//! - `FileStore`: one JSON file per key under a data directory
//! - `MemoryStore`: a shared in-memory map for tests and embedders
//!
//! Each call is independently atomic; there is no transaction spanning
//! calls.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Asynchronous key-value storage contract.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
