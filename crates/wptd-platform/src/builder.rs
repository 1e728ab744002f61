//! Build run records from platform descriptors and platform-id strings.
//!
//! Two strictness levels coexist on purpose: descriptor operations fail on
//! an unrecognized name (catalog entries are curated and a miss is a bug),
//! while platform-id parsing maps unknown fragments to the `Unknown` zero
//! value (ids arrive from directory names the uploader chose).

use wptd_core::{Browser, OperatingSystem, PlatformDescriptor, TestRun, WptdError};

use crate::enums::{browser_from_name, os_from_name};

/// os_version value meaning "any version".
const VERSION_WILDCARD: &str = "*";

/// Resolve the descriptor's operating system.
pub fn os_from_platform(platform: &PlatformDescriptor) -> Result<OperatingSystem, WptdError> {
    os_from_name(&platform.os_name)
}

/// OS version for run records: empty for the wildcard, verbatim otherwise.
pub fn os_version_str_from_platform(platform: &PlatformDescriptor) -> String {
    if platform.os_version == VERSION_WILDCARD {
        String::new()
    } else {
        platform.os_version.clone()
    }
}

/// Resolve the descriptor's browser.
pub fn browser_from_platform(platform: &PlatformDescriptor) -> Result<Browser, WptdError> {
    browser_from_name(&platform.browser_name)
}

/// Browser version, verbatim. No wildcard handling, unlike the OS side.
pub fn browser_version_str_from_platform(platform: &PlatformDescriptor) -> String {
    platform.browser_version.clone()
}

/// Build a run record from a curated catalog descriptor. Fails on the first
/// unrecognized identifier; commit metadata is attached separately.
pub fn test_run_from_platform(platform: &PlatformDescriptor) -> Result<TestRun, WptdError> {
    Ok(TestRun {
        browser: browser_from_platform(platform)?,
        browser_version_str: browser_version_str_from_platform(platform),
        os: os_from_platform(platform)?,
        os_version_str: os_version_str_from_platform(platform),
        ..TestRun::default()
    })
}

/// Build a run record from a results-directory platform id such as
/// `chrome-63.0-linux-*`.
///
/// Fragments are browser, browser version, os, os version, in that order.
/// Anything after the first four fragments is dropped; sometimes additional
/// fragments name the remote browser provider. Missing fragments leave the
/// record's defaults in place, and unknown names resolve to `Unknown`.
pub fn test_run_from_platform_id(platform_id: &str) -> TestRun {
    let mut run = TestRun::default();
    let parts: Vec<&str> = platform_id.split('-').collect();

    if let Some(browser_name) = parts.first() {
        run.browser = browser_from_name(browser_name).unwrap_or_default();
    }
    if let Some(browser_version) = parts.get(1) {
        run.browser_version_str = (*browser_version).to_string();
    }
    if let Some(os_name) = parts.get(2) {
        run.os = os_from_name(os_name).unwrap_or_default();
    }
    if let Some(os_version) = parts.get(3) {
        run.os_version_str = (*os_version).to_string();
    }

    run
}

/// Attach commit metadata to a run record.
pub fn add_commit_to_test_run(run: &mut TestRun, wpt_hash: &str, wpt_commit_time: i64) {
    run.wpt_hash = wpt_hash.to_string();
    run.wpt_commit_time = wpt_commit_time;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(browser: &str, browser_version: &str, os: &str, os_version: &str) -> PlatformDescriptor {
        PlatformDescriptor {
            browser_name: browser.to_string(),
            browser_version: browser_version.to_string(),
            os_name: os.to_string(),
            os_version: os_version.to_string(),
        }
    }

    #[test]
    fn test_os_version_wildcard_maps_to_empty() {
        let platform = descriptor("chrome", "63.0", "linux", "*");
        assert_eq!(os_version_str_from_platform(&platform), "");
    }

    #[test]
    fn test_os_version_literal_passes_through() {
        let platform = descriptor("safari", "10", "macos", "0.1");
        assert_eq!(os_version_str_from_platform(&platform), "0.1");
    }

    #[test]
    fn test_browser_version_has_no_wildcard_handling() {
        let platform = descriptor("chrome", "*", "linux", "*");
        assert_eq!(browser_version_str_from_platform(&platform), "*");
    }

    #[test]
    fn test_test_run_from_platform() {
        let platform = descriptor("firefox", "57.0", "linux", "*");
        let run = test_run_from_platform(&platform).unwrap();
        assert_eq!(run.browser, Browser::Firefox);
        assert_eq!(run.browser_version_str, "57.0");
        assert_eq!(run.os, OperatingSystem::Linux);
        assert_eq!(run.os_version_str, "");
    }

    #[test]
    fn test_test_run_from_platform_rejects_unknown_browser() {
        let platform = descriptor("netscape", "4.0", "linux", "*");
        assert!(test_run_from_platform(&platform).is_err());
    }

    #[test]
    fn test_platform_id_full() {
        let run = test_run_from_platform_id("chrome-63.0-linux-*");
        assert_eq!(run.browser, Browser::Chrome);
        assert_eq!(run.browser_version_str, "63.0");
        assert_eq!(run.os, OperatingSystem::Linux);
        assert_eq!(run.os_version_str, "*");
    }

    #[test]
    fn test_platform_id_extra_fragments_dropped() {
        let run = test_run_from_platform_id("edge-15-windows-10-sauce");
        assert_eq!(run.browser, Browser::Edge);
        assert_eq!(run.os, OperatingSystem::Windows);
        assert_eq!(run.os_version_str, "10");
    }

    #[test]
    fn test_platform_id_short_leaves_defaults() {
        let run = test_run_from_platform_id("firefox");
        assert_eq!(run.browser, Browser::Firefox);
        assert_eq!(run.browser_version_str, "");
        assert_eq!(run.os, OperatingSystem::Unknown);
    }

    #[test]
    fn test_platform_id_unknown_names_are_lenient() {
        let run = test_run_from_platform_id("lynx-2.8-plan9-4");
        assert_eq!(run.browser, Browser::Unknown);
        assert_eq!(run.os, OperatingSystem::Unknown);
        assert_eq!(run.browser_version_str, "2.8");
    }

    #[test]
    fn test_add_commit_to_test_run() {
        let mut run = test_run_from_platform_id("chrome-63.0-linux-*");
        add_commit_to_test_run(&mut run, "b5d4599280", 1509396020);
        assert_eq!(run.wpt_hash, "b5d4599280");
        assert_eq!(run.wpt_commit_time, 1509396020);
    }
}
