//! WPTD Core: Data Model, Error Model, Configuration
//!
//! Shared types for the test-run ingestion pipeline. No I/O lives here.

pub mod config;
pub mod data_model;
pub mod error;

pub use config::StorageConfig;
pub use data_model::{
    Browser, OperatingSystem, PlatformDescriptor, SubTest, TestReport, TestResult, TestRun,
    TestRunIndex, TestSummary,
};
pub use error::WptdError;
