//! Data Model: TestReport, TestSummary, TestRun, TestRunIndex
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One report produced by the external test harness for a single run.
///
/// Read-only input; every field below is required and validated once at the
/// parse boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    pub results: Vec<TestResult>,
}

/// Outcome of a single test file within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Test path (ex: "/dom/interfaces.html")
    pub test: String,
    /// Harness status string (ex: "OK", "ERROR", "TIMEOUT", "CRASH")
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub subtests: Vec<SubTest>,
}

/// A sub-assertion within a single test file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Subtest status string (ex: "PASS", "FAIL", "TIMEOUT", "NOTRUN")
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Compact per-test pass/fail record, one per [`TestResult`].
///
/// Field names are part of the warehouse contract and must stay stable.
/// Invariant: `num_tests_passed <= num_tests_total`, guaranteed by
/// construction in the summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSummary {
    /// Full 40-char hex commit sha of the tested WPT revision
    pub long_wpt_hash: String,
    /// Commit time, seconds since the Unix epoch
    pub wpt_commit_time: i64,
    /// Test path
    pub name: String,
    pub num_tests_passed: u32,
    pub num_tests_total: u32,
}

/// Loosely-typed platform descriptor from the external catalog
/// (`browsers.json`). `os_version` may be the wildcard `"*"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    pub browser_name: String,
    pub browser_version: String,
    pub os_name: String,
    pub os_version: String,
}

/// Operating systems test runs execute on. `Unknown` is the zero value,
/// mirroring the enum namespace the warehouse schema was generated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingSystem {
    #[default]
    Unknown,
    Linux,
    Macos,
    Windows,
    Android,
}

/// Browsers test runs execute on. `Unknown` is the zero value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Browser {
    #[default]
    Unknown,
    Chrome,
    Edge,
    Firefox,
    Safari,
}

/// One test run: a platform plus the WPT revision it was executed against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    pub browser: Browser,
    pub browser_version_str: String,
    pub os: OperatingSystem,
    pub os_version_str: String,
    pub wpt_hash: String,
    /// Commit time, seconds since the Unix epoch
    pub wpt_commit_time: i64,
    /// When the run record was created, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The published bidirectional sha <-> platform index artifact.
///
/// Keys are sorted (BTreeMap); the order of each value vector is the order
/// the store listing returned, duplicates included. Re-running the build
/// against an unchanged store yields equal content whenever the lister
/// returns a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunIndex {
    /// sha -> platform ids the sha was tested against
    pub by_sha: BTreeMap<String, Vec<String>>,
    /// platform id -> shas the platform was tested against
    pub by_platform: BTreeMap<String, Vec<String>>,
}

impl TestRunIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sha/platform pairing, appending on both sides so the
    /// symmetric-closure invariant holds with equal multiplicity.
    pub fn record(&mut self, sha: &str, platform: &str) {
        self.by_sha
            .entry(sha.to_string())
            .or_default()
            .push(platform.to_string());
        self.by_platform
            .entry(platform.to_string())
            .or_default()
            .push(sha.to_string());
    }

    /// Total number of recorded sha x platform pairs.
    pub fn pair_count(&self) -> usize {
        self.by_sha.values().map(Vec::len).sum()
    }
}
