//! Binary entrypoint for the wptd batch jobs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wptd_bq::parse_schema;
use wptd_core::{StorageConfig, WptdError};
use wptd_jobs::{check_catalog_job, generate_index_job, run_record_for_platform, summarize_job};
use wptd_platform::PlatformCatalog;
use wptd_store::{GcsStore, RetryPolicy, Retrying};

/// Batch jobs for the WPT dashboard data pipeline.
#[derive(Parser, Debug)]
#[command(name = "wptd-jobs")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan all results directories, then generate and upload the
    /// sha <-> platform index.
    GenerateIndex {
        /// Cloud project the results bucket belongs to
        #[arg(long, env = "WPTD_PROJECT_ID", default_value = "wptdashboard")]
        project_id: String,

        /// Bucket where test results are stored
        #[arg(long, env = "WPTD_BUCKET", default_value = "wptd")]
        bucket: String,

        /// Object name the index is published under
        #[arg(long, env = "WPTD_INDEX_OBJECT", default_value = "testruns-index.json")]
        index_object: String,

        /// OAuth bearer token for the upload
        #[arg(long, env = "WPTD_BEARER_TOKEN", hide_env_values = true)]
        bearer_token: Option<String>,

        /// Build and print the index without publishing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Summarize a harness report into warehouse-ready NDJSON on stdout.
    Summarize {
        /// Path to the report JSON file
        #[arg(long)]
        report: PathBuf,

        /// Full 40-char commit sha the report was produced against
        #[arg(long)]
        wpt_hash: String,

        /// Commit time, seconds since the Unix epoch
        #[arg(long)]
        commit_time: i64,

        /// Optional column-schema JSON; when given, rows are emitted in
        /// schema order instead of named summary records
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Platform id the report was produced on (ex: chrome-63.0-linux);
        /// when given, the run record is emitted as the first line
        #[arg(long)]
        platform_id: Option<String>,

        /// Path to browsers.json used to resolve the platform id
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Validate a platform catalog against the enum namespaces.
    CheckCatalog {
        /// Path to browsers.json (defaults to the compiled-in catalog)
        #[arg(long)]
        catalog: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), WptdError> {
    match command {
        Command::GenerateIndex {
            project_id,
            bucket,
            index_object,
            bearer_token,
            dry_run,
        } => {
            let config = StorageConfig::new(project_id, bucket, index_object);
            let mut store = GcsStore::new(config.bucket.clone())?;
            if let Some(token) = bearer_token {
                store = store.with_bearer_token(token);
            }
            let store = Retrying::new(store, RetryPolicy::default());

            let index = generate_index_job(&store, &config, dry_run)?;
            if dry_run {
                let rendered = serde_json::to_string_pretty(&index)
                    .map_err(|e| WptdError::Config(format!("render index: {}", e)))?;
                println!("{}", rendered);
            }
            Ok(())
        }

        Command::Summarize {
            report,
            wpt_hash,
            commit_time,
            schema,
            platform_id,
            catalog,
        } => {
            let report_bytes = std::fs::read(&report).map_err(|e| {
                WptdError::Config(format!("read {}: {}", report.display(), e))
            })?;
            let columns = match &schema {
                Some(path) => {
                    let data = std::fs::read(path).map_err(|e| {
                        WptdError::Config(format!("read {}: {}", path.display(), e))
                    })?;
                    Some(parse_schema(&data)?)
                }
                None => None,
            };

            if let Some(platform_id) = &platform_id {
                let catalog = match catalog.as_deref() {
                    Some(path) => PlatformCatalog::load(path)?,
                    None => PlatformCatalog::bundled().clone(),
                };
                let run =
                    run_record_for_platform(platform_id, &catalog, &wpt_hash, commit_time)?;
                let line = serde_json::to_string(&run)
                    .map_err(|e| WptdError::Config(format!("encode run record: {}", e)))?;
                println!("{}", line);
            }

            let lines =
                summarize_job(&report_bytes, &wpt_hash, commit_time, columns.as_deref())?;
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }

        Command::CheckCatalog { catalog } => {
            check_catalog_job(catalog.as_deref()).map(|_| ())
        }
    }
}
