//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::io::Cursor;

use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};

/// File content retrieved from the remote bucket
#[derive(Debug, Clone)]
pub struct RemoteFile {
    name: String,
    data: Bytes,
}

impl RemoteFile {
    pub fn new(name: String, data: Bytes) -> Self {
        Self { name, data }
    }

    /// Cleaned host-visible name the file was opened under
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Read view over the file content
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.data.as_ref())
    }
}

/// Timestamp reported by stat calls; aware iff the `use_tz` setting is on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    Aware(DateTime<Utc>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    pub fn is_aware(&self) -> bool {
        matches!(self, Timestamp::Aware(_))
    }
}
