//! WPTD-INDEX: Bidirectional sha <-> Platform Index
//!
//! Builds the published `testruns-index.json` artifact from a hierarchical
//! store listing. The build is a whole-batch rebuild; the only durable
//! state is the published artifact itself.

pub mod builder;

pub use builder::{build_index, is_hash_directory, publish_index};
