//! Error types for the survey pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by ingestion and aggregation.
///
/// A landmark without a matching gate is not an error; the geo joiner
/// reports it as an exclusion count instead.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// A raw sample file does not have the expected two-row header shape,
    /// or a data row's width disagrees with the header width.
    #[error("malformed input {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    /// No tables were given to the schema unifier.
    #[error("no sample tables to unify")]
    EmptyInput,

    /// A requested metric column is not part of the table schema.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
