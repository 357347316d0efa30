//! Storage helper operations
//!
//! Name and content-type helpers used by the adapter.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Guess a content type from the file extension.
pub fn content_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "svg" => "image/svg+xml",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Inserts a random suffix before the extension to resolve a name collision.
pub fn alternative_name(name: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(7)
        .map(char::from)
        .collect();

    let (dir, file) = match name.rfind('/') {
        Some(pos) => (&name[..pos + 1], &name[pos + 1..]),
        None => ("", name),
    };
    let (stem, extension) = match file.rfind('.') {
        Some(pos) if pos > 0 => (&file[..pos], &file[pos..]),
        _ => (file, ""),
    };

    format!("{}{}_{}{}", dir, stem, suffix, extension)
}
