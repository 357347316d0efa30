//! Pluggable storage contract

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage::results::{RemoteFile, Timestamp};

/// Storage surface consumed by a host application.
///
/// Every method must be implemented in full; a backend that stubs part of
/// this surface breaks callers far away from the storage layer.
#[async_trait]
pub trait Storage {
    /// Retrieve the object stored under `name`.
    async fn open(&self, name: &str) -> Result<RemoteFile, StorageError>;

    /// Store `content` under `name`, returning the name actually used.
    async fn save(&self, name: &str, content: &[u8]) -> Result<String, StorageError>;

    /// Delete the object stored under `name`. Deleting a missing object is
    /// not an error.
    async fn delete(&self, name: &str) -> Result<(), StorageError>;

    /// Whether anything exists under `name`.
    async fn exists(&self, name: &str) -> Result<bool, StorageError>;

    /// Size in bytes of the object stored under `name`.
    async fn size(&self, name: &str) -> Result<u64, StorageError>;

    /// Directories and files directly under `name`, in that order.
    async fn listdir(&self, name: &str) -> Result<(Vec<String>, Vec<String>), StorageError>;

    /// Public URL serving the object stored under `name`.
    fn url(&self, name: &str) -> Result<String, StorageError>;

    /// Last modification time of the object stored under `name`.
    async fn get_modified_time(&self, name: &str) -> Result<Timestamp, StorageError>;

    /// Creation time of the object stored under `name`.
    async fn get_created_time(&self, name: &str) -> Result<Timestamp, StorageError>;
}
