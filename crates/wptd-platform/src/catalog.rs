//! Platform Catalog
//!
//! The static `browsers.json` mapping from platform id to descriptor. A
//! default catalog is compiled in; deployments may load a different file.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use wptd_core::{PlatformDescriptor, WptdError};

use crate::builder::{
    browser_from_platform, browser_version_str_from_platform, os_from_platform,
    os_version_str_from_platform,
};

const DEFAULT_CATALOG_JSON: &str = include_str!("../data/browsers.json");

static DEFAULT_CATALOG: Lazy<PlatformCatalog> = Lazy::new(|| {
    PlatformCatalog::from_json(DEFAULT_CATALOG_JSON.as_bytes())
        .expect("embedded browsers.json is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCatalog {
    platforms: BTreeMap<String, PlatformDescriptor>,
}

impl PlatformCatalog {
    /// Decode a catalog document (JSON object, platform id -> descriptor).
    pub fn from_json(data: &[u8]) -> Result<Self, WptdError> {
        let platforms = serde_json::from_slice(data)
            .map_err(|e| WptdError::Config(format!("browsers.json: {}", e)))?;
        Ok(Self { platforms })
    }

    /// Load a catalog from a file path.
    pub fn load(path: &str) -> Result<Self, WptdError> {
        let data = std::fs::read(path)
            .map_err(|e| WptdError::Config(format!("read {}: {}", path, e)))?;
        Self::from_json(&data)
    }

    /// The compiled-in default catalog.
    pub fn bundled() -> &'static Self {
        &DEFAULT_CATALOG
    }

    pub fn get(&self, platform_id: &str) -> Option<&PlatformDescriptor> {
        self.platforms.get(platform_id)
    }

    /// Platform ids, in sorted order.
    pub fn platform_ids(&self) -> Vec<&str> {
        self.platforms.keys().map(String::as_str).collect()
    }

    /// Distinct browser names across the catalog, sorted.
    pub fn browser_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .platforms
            .values()
            .map(|p| p.browser_name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlatformDescriptor)> {
        self.platforms.iter().map(|(id, p)| (id.as_str(), p))
    }

    /// Resolve every descriptor through the four builder operations,
    /// failing on the first platform whose names do not resolve. Run at
    /// startup so a bad catalog aborts before any work is done.
    pub fn validate(&self) -> Result<(), WptdError> {
        for (platform_id, platform) in self.iter() {
            os_from_platform(platform).map_err(|e| {
                WptdError::UnrecognizedIdentifier(format!("catalog entry '{}': {}", platform_id, e))
            })?;
            browser_from_platform(platform).map_err(|e| {
                WptdError::UnrecognizedIdentifier(format!("catalog entry '{}': {}", platform_id, e))
            })?;
            // Version accessors are total; exercised for parity with the
            // enum lookups.
            os_version_str_from_platform(platform);
            browser_version_str_from_platform(platform);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_validates() {
        let catalog = PlatformCatalog::bundled();
        assert!(!catalog.is_empty());
        catalog.validate().unwrap();
    }

    #[test]
    fn test_browser_names_sorted_and_distinct() {
        let catalog = PlatformCatalog::bundled();
        assert_eq!(
            catalog.browser_names(),
            vec!["chrome", "edge", "firefox", "safari"]
        );
    }

    #[test]
    fn test_get_known_platform() {
        let platform = PlatformCatalog::bundled().get("chrome-63.0-linux").unwrap();
        assert_eq!(platform.browser_name, "chrome");
        assert_eq!(platform.os_version, "*");
    }

    #[test]
    fn test_validate_rejects_unknown_os() {
        let catalog = PlatformCatalog::from_json(
            br#"{"opera-12-os2": {
                "browser_name": "opera",
                "browser_version": "12",
                "os_name": "os2",
                "os_version": "*"
            }}"#,
        )
        .unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, WptdError::UnrecognizedIdentifier(_)));
    }

    #[test]
    fn test_from_json_rejects_bad_document() {
        assert!(PlatformCatalog::from_json(b"[1, 2, 3]").is_err());
    }
}
