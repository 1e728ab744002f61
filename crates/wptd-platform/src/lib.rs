//! WPTD-PLATFORM: Platform Descriptors to Run Records
//!
//! Enum lookup tables, the static platform catalog, and the builders that
//! turn loosely-typed descriptors and platform-id strings into typed run
//! records.

pub mod builder;
pub mod catalog;
pub mod enums;

pub use builder::{
    add_commit_to_test_run, browser_from_platform, browser_version_str_from_platform,
    os_from_platform, os_version_str_from_platform, test_run_from_platform,
    test_run_from_platform_id,
};
pub use catalog::PlatformCatalog;
pub use enums::{browser_from_name, os_from_name};
