//! Storage adapter
//!
//! Exposes the pluggable storage contract and its Supabase-backed
//! implementation.

mod adapter;
pub mod compress;
mod contract;
mod operations;
pub mod results;

pub use adapter::SupabaseStorage;
pub use compress::Compressor;
pub use contract::Storage;
pub use results::{RemoteFile, Timestamp};
