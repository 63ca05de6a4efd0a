//! Error handling for attraction parsing and reporting.
//!
//! Provides error types with context for reading the attraction dump,
//! building the field patterns, and writing tabular exports.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenicError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parsing failed for file: {path} - {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    #[error("No admissible attraction records in file: {path}")]
    EmptyResult { path: PathBuf },

    #[error("Invalid pattern built from label '{label}': {source}")]
    InvalidPattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ScenicError {
    /// True for the conditions the orchestrator folds into the no-data signal
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            ScenicError::FileNotFound { .. }
                | ScenicError::ParseFailed { .. }
                | ScenicError::EmptyResult { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScenicError>;
