//! Test-run index construction and publication.
//!
//! Scans the two-level `sha/platform/` results namespace and rebuilds the
//! bidirectional index wholesale. No incremental mode: every invocation
//! re-lists everything and the publish overwrites the previous artifact.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};
use wptd_core::{StorageConfig, TestRunIndex, WptdError};
use wptd_store::{ObjectLister, ObjectPublisher};

static HASH_DIRECTORY: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9a-f]+$").unwrap());

/// Whether a directory name looks like a results commit hash.
///
/// Used by jobs that enumerate mixed namespaces; [`build_index`] itself
/// indexes every prefix it is given, hash-shaped or not.
pub fn is_hash_directory(name: &str) -> bool {
    HASH_DIRECTORY.is_match(name.trim_end_matches('/'))
}

/// Walk the namespace and build the sha <-> platform index.
///
/// One listing call for the root plus one per sha directory, strictly
/// sequential, in listing order throughout. Children a lister yields twice
/// are recorded twice; any listing failure aborts the whole build.
pub fn build_index(lister: &dyn ObjectLister) -> Result<TestRunIndex, WptdError> {
    let mut index = TestRunIndex::new();

    let sha_directories = lister.list_children(None)?;
    debug!("scanning {} sha directories", sha_directories.len());

    for sha_directory in &sha_directories {
        let sha = sha_directory.trim_end_matches('/');
        let platform_directories = lister.list_children(Some(sha_directory.as_str()))?;

        for platform_directory in &platform_directories {
            let platform = platform_directory
                .strip_prefix(sha_directory.as_str())
                .unwrap_or(platform_directory)
                .trim_end_matches('/');
            index.record(sha, platform);
        }
    }

    Ok(index)
}

/// Serialize the index to a single JSON document and overwrite the
/// configured artifact object. Full replace, never a merge; on failure the
/// previously published artifact is left as it was.
pub fn publish_index(
    index: &TestRunIndex,
    publisher: &dyn ObjectPublisher,
    config: &StorageConfig,
) -> Result<(), WptdError> {
    let content = serde_json::to_vec(index)
        .map_err(|e| WptdError::Storage(format!("serialize index: {}", e)))?;
    publisher.put_object(&config.index_object, &content, "application/json")?;
    info!(
        "published index ({} pairs) to {}",
        index.pair_count(),
        config.index_url()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wptd_store::MemoryStore;

    #[test]
    fn test_is_hash_directory() {
        assert!(is_hash_directory("b5d4599280"));
        assert!(is_hash_directory("b5d4599280/"));
        assert!(!is_hash_directory("logs"));
        assert!(!is_hash_directory("B5D45992"));
        assert!(!is_hash_directory(""));
    }

    #[test]
    fn test_build_index_two_levels() {
        let store = MemoryStore::with_objects([
            "abc123/chrome-63.0-linux/x",
            "abc123/firefox-57.0-linux/x",
            "def456/chrome-63.0-linux/x",
        ]);
        let index = build_index(&store).unwrap();

        assert_eq!(
            index.by_sha["abc123"],
            vec!["chrome-63.0-linux", "firefox-57.0-linux"]
        );
        assert_eq!(index.by_sha["def456"], vec!["chrome-63.0-linux"]);
        assert_eq!(index.by_platform["chrome-63.0-linux"], vec!["abc123", "def456"]);
        assert_eq!(index.by_platform["firefox-57.0-linux"], vec!["abc123"]);
    }

    #[test]
    fn test_build_index_empty_namespace() {
        let store = MemoryStore::new();
        let index = build_index(&store).unwrap();
        assert!(index.by_sha.is_empty());
        assert!(index.by_platform.is_empty());
    }

    #[test]
    fn test_build_index_indexes_non_hash_prefixes_too() {
        // The builder takes every prefix; filtering is the caller's call.
        let store = MemoryStore::with_objects(["logs/chrome-63.0-linux/x"]);
        let index = build_index(&store).unwrap();
        assert!(index.by_sha.contains_key("logs"));
    }

    #[test]
    fn test_publish_overwrites_artifact() {
        let store = MemoryStore::with_objects(["abc123/chrome-63.0-linux/x"]);
        let config = StorageConfig::default();

        let index = build_index(&store).unwrap();
        publish_index(&index, &store, &config).unwrap();

        let content = store.object("testruns-index.json").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&content).unwrap();
        assert_eq!(value["by_sha"]["abc123"][0], "chrome-63.0-linux");
        assert_eq!(value["by_platform"]["chrome-63.0-linux"][0], "abc123");
    }
}
