//! Statically declared name -> enum lookup tables.
//!
//! The canonical keys are uppercase; lookups fold case so catalog values
//! (`"linux"`) and platform-id fragments (`"chrome"`) both resolve. A miss
//! is a typed unrecognized-identifier error, never a panic.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use wptd_core::{Browser, OperatingSystem, WptdError};

static OS_BY_NAME: Lazy<HashMap<&'static str, OperatingSystem>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("LINUX", OperatingSystem::Linux);
    m.insert("MACOS", OperatingSystem::Macos);
    m.insert("WINDOWS", OperatingSystem::Windows);
    m.insert("ANDROID", OperatingSystem::Android);
    m
});

static BROWSER_BY_NAME: Lazy<HashMap<&'static str, Browser>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("CHROME", Browser::Chrome);
    m.insert("EDGE", Browser::Edge);
    m.insert("FIREFOX", Browser::Firefox);
    m.insert("SAFARI", Browser::Safari);
    m
});

/// Resolve an operating-system name against the enum namespace.
pub fn os_from_name(name: &str) -> Result<OperatingSystem, WptdError> {
    OS_BY_NAME
        .get(name.to_uppercase().as_str())
        .copied()
        .ok_or_else(|| WptdError::UnrecognizedIdentifier(format!("unknown os name '{}'", name)))
}

/// Resolve a browser name against the enum namespace.
pub fn browser_from_name(name: &str) -> Result<Browser, WptdError> {
    BROWSER_BY_NAME
        .get(name.to_uppercase().as_str())
        .copied()
        .ok_or_else(|| {
            WptdError::UnrecognizedIdentifier(format!("unknown browser name '{}'", name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_folds_case() {
        assert_eq!(os_from_name("linux").unwrap(), OperatingSystem::Linux);
        assert_eq!(os_from_name("MacOS").unwrap(), OperatingSystem::Macos);
        assert_eq!(browser_from_name("chrome").unwrap(), Browser::Chrome);
    }

    #[test]
    fn test_lookup_miss_is_typed() {
        assert!(matches!(
            os_from_name("beos"),
            Err(WptdError::UnrecognizedIdentifier(_))
        ));
        assert!(matches!(
            browser_from_name("netscape"),
            Err(WptdError::UnrecognizedIdentifier(_))
        ));
    }

    #[test]
    fn test_serialized_names_match_schema_namespace() {
        assert_eq!(
            serde_json::to_value(Browser::Chrome).unwrap(),
            serde_json::json!("CHROME")
        );
        assert_eq!(
            serde_json::to_value(OperatingSystem::Unknown).unwrap(),
            serde_json::json!("UNKNOWN")
        );
    }
}
