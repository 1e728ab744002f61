//! WPTD-REPORT: Harness Report to Summary Records
//!
//! This crate provides the ingestion layer that converts raw test-harness
//! reports into compact per-test summary records for warehouse loading.
//!
//! # Example
//!
//! ```ignore
//! use wptd_report::{parse_report, report_to_summary};
//!
//! let report = parse_report(&bytes)?;
//! let summaries = report_to_summary(&long_hash, commit_time, &report);
//! for summary in &summaries {
//!     println!("{}: {}/{}", summary.name, summary.num_tests_passed, summary.num_tests_total);
//! }
//! ```

pub mod report;
pub mod summary;
pub mod version;

pub use report::{parse_report, parse_report_str};
pub use summary::report_to_summary;
pub use version::major_minor;
