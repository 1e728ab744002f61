//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WptdError {
    #[error("PRECONDITION/{0}")]
    Precondition(String),

    #[error("REPORT/{0}")]
    MalformedReport(String),

    #[error("LOOKUP/{0}")]
    UnrecognizedIdentifier(String),

    #[error("STORAGE/{0}")]
    Storage(String),

    #[error("CONFIG/{0}")]
    Config(String),
}
