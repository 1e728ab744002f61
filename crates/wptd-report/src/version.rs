//! Version normalization.
//!
//! Warehouse rows carry browser/OS versions at major.minor granularity;
//! anything finer is noise across runs of the same channel.

use wptd_core::WptdError;

/// Reduce a dotted version string to its first two components.
///
/// `"1.1.1"` becomes `"1.1"`; a single component passes through unchanged.
/// An empty version is a caller bug and fails with a precondition violation.
pub fn major_minor(version: &str) -> Result<String, WptdError> {
    if version.is_empty() {
        return Err(WptdError::Precondition(
            "version string must be non-empty".to_string(),
        ));
    }
    Ok(version.split('.').take(2).collect::<Vec<_>>().join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_minor_passthrough() {
        assert_eq!(major_minor("1.1").unwrap(), "1.1");
        assert_eq!(major_minor("63").unwrap(), "63");
    }

    #[test]
    fn test_major_minor_truncates_patch() {
        assert_eq!(major_minor("1.1.1").unwrap(), "1.1");
        assert_eq!(major_minor("63.0.3239.132").unwrap(), "63.0");
    }

    #[test]
    fn test_major_minor_rejects_empty() {
        assert!(matches!(
            major_minor(""),
            Err(WptdError::Precondition(_))
        ));
    }
}
