//! Supabase-backed storage adapter

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Local, Utc};
use log::{debug, info};
use once_cell::sync::OnceCell;

use crate::client::{BucketClient, ObjectEntry};
use crate::config::StorageConfig;
use crate::error::{ClientError, PathError, StorageError};
use crate::listing::reconstruct;
use crate::path::{clean_name, resolve_key};
use crate::storage::compress::Compressor;
use crate::storage::contract::Storage;
use crate::storage::operations::{alternative_name, content_type_for};
use crate::storage::results::{RemoteFile, Timestamp};

/// Storage backend that proxies file operations to a Supabase bucket.
pub struct SupabaseStorage {
    config: StorageConfig,
    compressor: Option<Compressor>,
    client: OnceCell<BucketClient>,
}

impl SupabaseStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            compressor: None,
            client: OnceCell::new(),
        }
    }

    /// Attach a gzip transform for compressible content types.
    pub fn with_compressor(mut self, compressor: Compressor) -> Self {
        self.compressor = Some(compressor);
        self
    }

    /// Get the current bucket client. If there is no current client yet,
    /// construct it; construction happens at most once per adapter.
    fn client(&self) -> Result<&BucketClient, StorageError> {
        self.client
            .get_or_try_init(|| BucketClient::new(&self.config))
            .map_err(StorageError::from)
    }

    fn key(&self, name: &str) -> Result<String, StorageError> {
        Ok(resolve_key(&self.config.root_path, name)?)
    }

    /// Key for an operation that targets a single object; directory-style
    /// names are handled by `listdir` and `exists` instead.
    fn object_key(&self, name: &str) -> Result<String, StorageError> {
        if name.is_empty() {
            return Err(StorageError::Path(PathError::InvalidPath(
                "Empty name".into(),
            )));
        }
        self.key(name)
    }

    /// Find the listing entry describing the object stored under `name`.
    async fn object_entry(&self, name: &str) -> Result<ObjectEntry, StorageError> {
        let key = self.object_key(name)?;
        let (prefix, basename) = match key.rfind('/') {
            Some(pos) => (&key[..pos], &key[pos + 1..]),
            None => ("", key.as_str()),
        };

        let entries = match self.client()?.list(prefix).await {
            Ok(entries) => entries,
            Err(ClientError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        entries
            .into_iter()
            .find(|entry| entry.name == basename && entry.is_file())
            .ok_or_else(|| StorageError::ObjectNotFound(name.to_string()))
    }

    /// Name to store under, renaming on collision unless overwriting is on.
    pub async fn available_name(&self, name: &str) -> Result<String, StorageError> {
        let mut candidate = clean_name(name);
        if self.config.file_overwrite {
            return Ok(candidate);
        }

        while self.exists(&candidate).await? {
            candidate = alternative_name(&candidate);
        }
        Ok(candidate)
    }

    fn timestamp(&self, instant: DateTime<Utc>) -> Timestamp {
        if self.config.use_tz {
            Timestamp::Aware(instant)
        } else {
            Timestamp::Naive(instant.with_timezone(&Local).naive_local())
        }
    }
}

#[async_trait]
impl Storage for SupabaseStorage {
    async fn open(&self, name: &str) -> Result<RemoteFile, StorageError> {
        let key = self.object_key(name)?;
        let data = self.client()?.download(&key).await?;

        let data = match &self.compressor {
            Some(_) if Compressor::is_compressed(&data) => {
                Bytes::from(Compressor::decompress(&data)?)
            }
            _ => data,
        };

        debug!("Opened {} ({} bytes)", key, data.len());
        Ok(RemoteFile::new(clean_name(name), data))
    }

    async fn save(&self, name: &str, content: &[u8]) -> Result<String, StorageError> {
        if name.is_empty() {
            return Err(StorageError::Path(PathError::InvalidPath(
                "Empty name".into(),
            )));
        }

        let stored_name = self.available_name(name).await?;
        let key = self.object_key(&stored_name)?;
        let content_type = content_type_for(&stored_name);

        let payload = match &self.compressor {
            Some(compressor) if compressor.should_compress(content_type) => {
                compressor.compress(content)?
            }
            _ => content.to_vec(),
        };

        self.client()?
            .upload(&key, payload, content_type, self.config.file_overwrite)
            .await?;

        info!("Saved {} ({} bytes)", stored_name, content.len());
        Ok(stored_name)
    }

    async fn delete(&self, name: &str) -> Result<(), StorageError> {
        let key = self.object_key(name)?;
        match self.client()?.remove(&key).await {
            Ok(()) => {
                info!("Deleted {}", key);
                Ok(())
            }
            Err(ClientError::NotFound(_)) => {
                debug!("Delete of missing object {} ignored", key);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, name: &str) -> Result<bool, StorageError> {
        let key = self.key(name)?;
        match self.client()?.list(&key).await {
            Ok(entries) => Ok(!entries.is_empty()),
            Err(ClientError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn size(&self, name: &str) -> Result<u64, StorageError> {
        let entry = self.object_entry(name).await?;
        let metadata = entry
            .metadata
            .ok_or_else(|| StorageError::MissingMetadata(name.to_string()))?;
        Ok(metadata.size)
    }

    async fn listdir(&self, name: &str) -> Result<(Vec<String>, Vec<String>), StorageError> {
        let key = self.key(name)?;
        let entries = self.client()?.list(&key).await?;
        let listing = reconstruct(&key, &entries);

        debug!(
            "Listed {} - {} dirs, {} files",
            key,
            listing.dirs.len(),
            listing.files.len()
        );
        Ok(listing.into_pair())
    }

    fn url(&self, name: &str) -> Result<String, StorageError> {
        let key = self.object_key(name)?;
        Ok(self.client()?.public_url(&key))
    }

    async fn get_modified_time(&self, name: &str) -> Result<Timestamp, StorageError> {
        let entry = self.object_entry(name).await?;
        let updated = entry
            .updated_at
            .ok_or_else(|| StorageError::MissingMetadata(name.to_string()))?;
        Ok(self.timestamp(updated))
    }

    async fn get_created_time(&self, name: &str) -> Result<Timestamp, StorageError> {
        let entry = self.object_entry(name).await?;
        let created = entry
            .created_at
            .ok_or_else(|| StorageError::MissingMetadata(name.to_string()))?;
        Ok(self.timestamp(created))
    }
}
