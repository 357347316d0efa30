//! Error types
//!
//! Defines domain-specific error types for each module of the storage backend.

use std::fmt;
use std::io;

/// Path normalization errors
#[derive(Debug)]
pub enum PathError {
    InvalidPath(String),
    PathTraversal(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            PathError::PathTraversal(p) => write!(f, "Path traversal attempt: {}", p),
        }
    }
}

impl std::error::Error for PathError {}

/// Remote client errors
#[derive(Debug)]
pub enum ClientError {
    Misconfigured(String),
    Request(reqwest::Error),
    NotFound(String),
    Unexpected { status: u16, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Misconfigured(msg) => write!(f, "Client misconfigured: {}", msg),
            ClientError::Request(e) => write!(f, "Request failed: {}", e),
            ClientError::NotFound(key) => write!(f, "Object not found: {}", key),
            ClientError::Unexpected { status, message } => {
                write!(f, "Unexpected response ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Request(error)
    }
}

/// Storage adapter errors
#[derive(Debug)]
pub enum StorageError {
    Path(PathError),
    Client(ClientError),
    ObjectNotFound(String),
    MissingMetadata(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Path(e) => write!(f, "Path error: {}", e),
            StorageError::Client(e) => write!(f, "Client error: {}", e),
            StorageError::ObjectNotFound(name) => write!(f, "Object not found: {}", name),
            StorageError::MissingMetadata(name) => {
                write!(f, "No metadata reported for: {}", name)
            }
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<PathError> for StorageError {
    fn from(error: PathError) -> Self {
        StorageError::Path(error)
    }
}

impl From<ClientError> for StorageError {
    fn from(error: ClientError) -> Self {
        StorageError::Client(error)
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}
