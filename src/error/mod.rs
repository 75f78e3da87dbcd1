//! Error handling for the risk engine.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

use crate::models::ConditionKind;
use crate::survey::SurveyField;

/// Specialized error type for the risk engine
#[derive(Debug, thiserror::Error)]
pub enum RiskEngineError {
    /// A required survey field was absent from the raw row
    #[error("Missing required field: {0}")]
    MissingField(SurveyField),

    /// A required survey field could not be coerced to a finite number
    #[error("Field {field} is not numeric: {value}")]
    NonNumericField {
        /// Offending field
        field: SurveyField,
        /// Raw value as seen in the source
        value: String,
    },

    /// A numeric field held a value outside its coded domain
    #[error("Field {field} has invalid value {value}")]
    InvalidField {
        /// Offending field
        field: SurveyField,
        /// Coerced value
        value: f64,
    },

    /// The condition cannot be toggled on the interactive profile
    #[error("Condition {0} is not part of the interactive profile")]
    UnsupportedCondition(ConditionKind),

    /// The survey file extension is not a supported format
    #[error("Unsupported survey file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// No records were accepted from a data source
    #[error("No usable records in {}", .0.display())]
    EmptyDataset(PathBuf),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding CSV data or casting columns
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error serializing results
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A blocking load task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for risk engine operations
pub type Result<T> = std::result::Result<T, RiskEngineError>;
