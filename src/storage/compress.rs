//! Gzip transform for stored content
//!
//! Composed into the adapter as an optional collaborator; compresses
//! configured content types on save and decompresses gzip payloads on open.

use std::collections::HashSet;
use std::io;
use std::io::prelude::*;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Gzip transform applied to compressible content types
#[derive(Debug, Clone)]
pub struct Compressor {
    content_types: HashSet<String>,
}

impl Default for Compressor {
    fn default() -> Self {
        let content_types = [
            "text/css",
            "text/javascript",
            "application/javascript",
            "application/x-javascript",
            "image/svg+xml",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self { content_types }
    }
}

impl Compressor {
    pub fn new(content_types: impl IntoIterator<Item = String>) -> Self {
        Self {
            content_types: content_types.into_iter().collect(),
        }
    }

    /// Whether payloads of this content type get compressed on save
    pub fn should_compress(&self, content_type: &str) -> bool {
        self.content_types.contains(content_type)
    }

    /// Whether a downloaded payload is gzip-encoded
    pub fn is_compressed(data: &[u8]) -> bool {
        data.starts_with(&GZIP_MAGIC)
    }

    pub fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }

    pub fn decompress(data: &[u8]) -> io::Result<Vec<u8>> {
        let mut decoded = Vec::new();
        GzDecoder::new(data).read_to_end(&mut decoded)?;
        Ok(decoded)
    }
}
