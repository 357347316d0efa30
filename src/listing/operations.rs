//! Listing reconstruction implementation

use crate::client::ObjectEntry;
use crate::listing::results::Listing;

/// Partitions the remote entries reported under `prefix` into directories
/// and files.
///
/// Entries carrying a metadata record are files; entries without one are
/// directory placeholders. An entry that only re-reports the queried
/// directory itself is dropped, so an empty directory lists as empty.
pub fn reconstruct(prefix: &str, entries: &[ObjectEntry]) -> Listing {
    let own_name = prefix
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    let mut listing = Listing::default();
    for entry in entries {
        let name = entry.name.trim_end_matches('/');
        if name.is_empty() {
            continue;
        }
        if entry.is_file() {
            listing.files.push(name.to_string());
        } else if name != own_name {
            listing.dirs.push(name.to_string());
        }
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ObjectMetadata;

    fn dir_entry(name: &str) -> ObjectEntry {
        ObjectEntry {
            name: name.to_string(),
            id: None,
            created_at: None,
            updated_at: None,
            metadata: None,
        }
    }

    fn file_entry(name: &str, size: u64) -> ObjectEntry {
        ObjectEntry {
            metadata: Some(ObjectMetadata {
                size,
                mimetype: None,
            }),
            ..dir_entry(name)
        }
    }

    #[test]
    fn test_reconstruct_partitions_dirs_and_files() {
        let entries = vec![dir_entry("dir"), file_entry("2.txt", 15)];
        let listing = reconstruct("some/", &entries);
        assert_eq!(listing.dirs, vec!["dir"]);
        assert_eq!(listing.files, vec!["2.txt"]);
    }

    #[test]
    fn test_reconstruct_empty_directory_reports_itself() {
        // Listing "dir/" where the only entry is "dir" itself means the
        // directory has no children.
        let listing = reconstruct("dir/", &[dir_entry("dir")]);
        assert!(listing.dirs.is_empty());
        assert!(listing.files.is_empty());
    }

    #[test]
    fn test_reconstruct_self_named_file_is_kept() {
        let listing = reconstruct("dir/", &[file_entry("dir", 3)]);
        assert_eq!(listing.files, vec!["dir"]);
    }

    #[test]
    fn test_reconstruct_order_does_not_affect_partition() {
        let forward = vec![dir_entry("a"), file_entry("b.txt", 1), dir_entry("c")];
        let mut backward = forward.clone();
        backward.reverse();

        let first = reconstruct("some/", &forward);
        let second = reconstruct("some/", &backward);

        let sorted = |mut v: Vec<String>| {
            v.sort();
            v
        };
        assert_eq!(sorted(first.dirs), sorted(second.dirs));
        assert_eq!(sorted(first.files), sorted(second.files));
    }

    #[test]
    fn test_reconstruct_trims_trailing_slashes() {
        let listing = reconstruct("some/", &[dir_entry("nested/")]);
        assert_eq!(listing.dirs, vec!["nested"]);
    }

    #[test]
    fn test_reconstruct_at_bucket_root() {
        let entries = vec![dir_entry("docs"), file_entry("readme.txt", 9)];
        let listing = reconstruct("", &entries);
        assert_eq!(listing.dirs, vec!["docs"]);
        assert_eq!(listing.files, vec!["readme.txt"]);
    }
}
