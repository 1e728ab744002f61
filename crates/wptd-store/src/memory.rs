//! Deterministic in-memory store for tests.
//!
//! Seeded with flat object names; one-level common prefixes are derived the
//! way a delimiter listing would return them, sorted. Published objects are
//! kept so tests can assert on the exact bytes written.

use std::collections::BTreeMap;
use std::sync::Mutex;
use wptd_core::WptdError;

use crate::{ObjectLister, ObjectPublisher};

#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with empty objects at the given names.
    pub fn with_objects<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let objects = names.into_iter().map(|n| (n.into(), Vec::new())).collect();
        Self {
            objects: Mutex::new(objects),
        }
    }

    /// Bytes of a stored object, if present.
    pub fn object(&self, name: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(name).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

impl ObjectLister for MemoryStore {
    fn list_children(&self, prefix: Option<&str>) -> Result<Vec<String>, WptdError> {
        let prefix = prefix.unwrap_or("");
        let objects = self.objects.lock().unwrap();

        let mut children: Vec<String> = Vec::new();
        for name in objects.keys() {
            let Some(remainder) = name.strip_prefix(prefix) else {
                continue;
            };
            // Only names that still have a `/` below the prefix contribute a
            // common prefix; direct children are plain objects.
            if let Some(slash) = remainder.find('/') {
                let child = format!("{}{}/", prefix, &remainder[..slash]);
                if children.last() != Some(&child) {
                    children.push(child);
                }
            }
        }
        Ok(children)
    }
}

impl ObjectPublisher for MemoryStore {
    fn put_object(
        &self,
        name: &str,
        content: &[u8],
        _content_type: &str,
    ) -> Result<(), WptdError> {
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), content.to_vec());
        Ok(())
    }
}
