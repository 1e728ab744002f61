//! Job configuration, injected at construction time instead of read from
//! ambient globals.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Cloud project the buckets belong to
    pub project_id: String,
    /// Bucket holding the `sha/platform/` results namespace
    pub bucket: String,
    /// Object name the index artifact is published under
    pub index_object: String,
}

impl StorageConfig {
    pub fn new(project_id: String, bucket: String, index_object: String) -> Self {
        Self {
            project_id,
            bucket,
            index_object,
        }
    }

    /// Public read URL of the published index artifact.
    pub fn index_url(&self) -> String {
        format!(
            "https://storage.googleapis.com/{}/{}",
            self.bucket, self.index_object
        )
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            project_id: "wptdashboard".to_string(),
            bucket: "wptd".to_string(),
            index_object: "testruns-index.json".to_string(),
        }
    }
}
