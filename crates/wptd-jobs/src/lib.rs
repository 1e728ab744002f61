//! WPTD-JOBS: Batch Jobs
//!
//! The job bodies behind the `wptd-jobs` binary, kept binary-free so tests
//! can run them against in-memory stores. Each job is whole-batch and
//! synchronous; the first error aborts the run.

use chrono::Utc;
use tracing::{info, warn};
use wptd_bq::{summary_to_row, Column};
use wptd_core::{StorageConfig, TestRun, TestRunIndex, TestSummary, WptdError};
use wptd_index::{build_index, is_hash_directory, publish_index};
use wptd_platform::{
    add_commit_to_test_run, test_run_from_platform, test_run_from_platform_id, PlatformCatalog,
};
use wptd_report::{major_minor, parse_report, report_to_summary};
use wptd_store::{ObjectLister, ObjectPublisher};

/// Rebuild the sha <-> platform index and publish it, unless `dry_run` is
/// set, in which case the built index is returned unpublished.
pub fn generate_index_job(
    store: &(impl ObjectLister + ObjectPublisher),
    config: &StorageConfig,
    dry_run: bool,
) -> Result<TestRunIndex, WptdError> {
    info!(
        "scanning results namespace in bucket '{}' (project '{}')",
        config.bucket, config.project_id
    );
    let index = build_index(store)?;
    info!(
        "built index: {} shas, {} platforms",
        index.by_sha.len(),
        index.by_platform.len()
    );

    let non_hash = index
        .by_sha
        .keys()
        .filter(|name| !is_hash_directory(name))
        .count();
    if non_hash > 0 {
        warn!(
            "{} top-level directories do not look like commit hashes",
            non_hash
        );
    }

    if dry_run {
        info!("dry run, skipping publish");
    } else {
        publish_index(&index, store, config)?;
    }
    Ok(index)
}

/// Summarize one report into warehouse-ready lines: plain summary records,
/// or row tuples when a column schema is supplied.
pub fn summarize_job(
    report_bytes: &[u8],
    wpt_hash: &str,
    wpt_commit_time: i64,
    schema: Option<&[Column]>,
) -> Result<Vec<String>, WptdError> {
    let report = parse_report(report_bytes)?;
    let summaries = report_to_summary(wpt_hash, wpt_commit_time, &report);
    info!("summarized {} results", summaries.len());

    summaries
        .iter()
        .map(|summary| encode_line(summary, schema))
        .collect()
}

fn encode_line(summary: &TestSummary, schema: Option<&[Column]>) -> Result<String, WptdError> {
    let value = match schema {
        Some(schema) => serde_json::to_value(summary_to_row(summary, schema)?),
        None => serde_json::to_value(summary),
    };
    value
        .map(|v| v.to_string())
        .map_err(|e| WptdError::Config(format!("encode summary: {}", e)))
}

/// Build the run record for a platform at a given commit.
///
/// Catalog descriptors resolve strictly (an unrecognized name is a bug in
/// the curated catalog); ids absent from the catalog fall back to lenient
/// platform-id parsing. Browser versions are reduced to major.minor, the
/// granularity warehouse rows carry.
pub fn run_record_for_platform(
    platform_id: &str,
    catalog: &PlatformCatalog,
    wpt_hash: &str,
    wpt_commit_time: i64,
) -> Result<TestRun, WptdError> {
    let mut run = match catalog.get(platform_id) {
        Some(descriptor) => test_run_from_platform(descriptor)?,
        None => test_run_from_platform_id(platform_id),
    };
    if !run.browser_version_str.is_empty() {
        run.browser_version_str = major_minor(&run.browser_version_str)?;
    }
    add_commit_to_test_run(&mut run, wpt_hash, wpt_commit_time);
    run.created_at = Some(Utc::now());
    Ok(run)
}

/// Resolve every catalog descriptor through the platform builders; returns
/// the number of validated platforms.
pub fn check_catalog_job(catalog_path: Option<&str>) -> Result<usize, WptdError> {
    let catalog = match catalog_path {
        Some(path) => PlatformCatalog::load(path)?,
        None => PlatformCatalog::bundled().clone(),
    };
    catalog.validate()?;
    info!(
        "catalog ok: {} platforms, browsers: {}",
        catalog.len(),
        catalog.browser_names().join(", ")
    );
    Ok(catalog.len())
}
