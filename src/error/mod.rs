//! Error handling
//!
//! Defines error types and handling for the storage backend.

pub mod types;

pub use types::*;
