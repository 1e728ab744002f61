//! Report summarization: one compact pass/fail record per test file.

use wptd_core::{TestReport, TestSummary};

/// Harness status counted as a top-level pass. Exact match only.
const STATUS_OK: &str = "OK";

/// Subtest status counted as a pass. Exact match only.
const STATUS_PASS: &str = "PASS";

/// Flatten a report into per-test summary records.
///
/// For every result, in input order: the top-level outcome counts as one
/// unit plus one unit per subtest, so `num_tests_total = 1 + subtests`, and
/// only a literal `OK` / `PASS` counts toward `num_tests_passed`. Variant
/// statuses (`TIMEOUT`, `CRASH`, `NOTRUN`, ...) count as not passed.
///
/// One summary per result, nothing filtered, nothing merged.
pub fn report_to_summary(
    long_wpt_hash: &str,
    wpt_commit_time: i64,
    report: &TestReport,
) -> Vec<TestSummary> {
    report
        .results
        .iter()
        .map(|result| {
            let subtests_passed = result
                .subtests
                .iter()
                .filter(|s| s.status == STATUS_PASS)
                .count() as u32;
            let top_level_passed = u32::from(result.status == STATUS_OK);

            TestSummary {
                long_wpt_hash: long_wpt_hash.to_string(),
                wpt_commit_time,
                name: result.test.clone(),
                num_tests_passed: top_level_passed + subtests_passed,
                num_tests_total: 1 + result.subtests.len() as u32,
            }
        })
        .collect()
}
