//! WPTD-STORE: Object-Store Boundary
//!
//! The two capabilities the pipeline consumes from the object store, as
//! traits: one-level hierarchical listing and single-object publish. The
//! index algorithm only ever sees these traits; the GCS client, the retry
//! wrapper, and the in-memory test store all implement them.

pub mod gcs;
pub mod memory;
pub mod retry;

use wptd_core::WptdError;

/// One level of hierarchical listing with delimiter `/`.
///
/// Returns the full common-prefix names under `prefix` (trailing slash
/// included, ex: `"abc123/"` at the root, `"abc123/chrome-63.0-linux/"`
/// below it), in the order the service yields them. `None` lists the
/// namespace root.
pub trait ObjectLister {
    fn list_children(&self, prefix: Option<&str>) -> Result<Vec<String>, WptdError>;
}

/// Single-object overwrite. The write replaces the object wholesale; it is
/// atomic only to the extent the store's single-object write is.
pub trait ObjectPublisher {
    fn put_object(&self, name: &str, content: &[u8], content_type: &str)
        -> Result<(), WptdError>;
}

impl<T: ObjectLister + ?Sized> ObjectLister for &T {
    fn list_children(&self, prefix: Option<&str>) -> Result<Vec<String>, WptdError> {
        (**self).list_children(prefix)
    }
}

impl<T: ObjectPublisher + ?Sized> ObjectPublisher for &T {
    fn put_object(
        &self,
        name: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), WptdError> {
        (**self).put_object(name, content, content_type)
    }
}

pub use gcs::GcsStore;
pub use memory::MemoryStore;
pub use retry::{Retrying, RetryPolicy};
