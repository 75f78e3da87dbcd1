//! BRFSS diabetes health indicators survey ingestion
//!
//! Raw survey rows, their normalization into `HealthRecord`s, file readers
//! for the CSV and Parquet distributions of the table, and the synthetic
//! fallback population.

pub mod conversion;
pub mod raw;
pub mod reader;
pub mod schema;
pub mod synthetic;

pub use conversion::{NormalizedRows, normalize_row, normalize_rows};
pub use raw::{RawRow, RawValue};
pub use reader::{read_survey_batches, read_survey_file, rows_from_batch};
pub use schema::SurveyField;
pub use synthetic::{SyntheticConfig, generate_synthetic};
