//! Report boundary: decode and structurally validate harness output.
//!
//! Validation happens exactly once, here. Everything downstream works on
//! typed records and never re-checks field presence. Statuses deliberately
//! stay strings: pass counting matches the literal `OK`/`PASS` values and
//! must not reinterpret variant statuses at decode time.

use wptd_core::{TestReport, WptdError};

/// Decode a harness report from raw JSON bytes.
///
/// A missing `test`, `status` or `subtests` field anywhere in the document
/// fails the whole report; there is no per-result skipping.
pub fn parse_report(data: &[u8]) -> Result<TestReport, WptdError> {
    serde_json::from_slice(data).map_err(|e| WptdError::MalformedReport(e.to_string()))
}

/// Decode a harness report from a JSON string.
pub fn parse_report_str(data: &str) -> Result<TestReport, WptdError> {
    parse_report(data.as_bytes())
}
