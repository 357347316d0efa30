//! Remote bucket client
//!
//! Thin HTTP wrapper over the Supabase Storage object API.

mod api;
pub mod records;

pub use api::BucketClient;
pub use records::{ObjectEntry, ObjectMetadata};
