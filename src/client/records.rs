//! Wire records returned by the remote storage API

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of a remote listing.
///
/// A populated `metadata` record marks a file; directory placeholders come
/// back with `metadata` null.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEntry {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<ObjectMetadata>,
}

impl ObjectEntry {
    /// Whether this entry describes a file rather than a directory.
    pub fn is_file(&self) -> bool {
        self.metadata.is_some()
    }
}

/// File metadata nested in a listing entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectMetadata {
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mimetype: Option<String>,
}
