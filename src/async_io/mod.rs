//! Asynchronous dataset loading
//!
//! File existence checks run on tokio; decoding runs on the blocking pool.

pub mod file_ops;
pub mod loader;

pub use file_ops::{read_survey_file_async, survey_file_exists_async};
pub use loader::{
    DataSource, FALLBACK_WARNING, FileSurveySource, LoadOutcome, LoadReport, SurveySource,
    load_dataset, load_dataset_from,
};
