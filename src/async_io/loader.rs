//! Dataset loading with synthetic fallback
//!
//! Candidate paths are tried in order. The first one that exists, decodes
//! and yields at least one accepted record becomes the dataset; failures
//! are logged and the next candidate is tried. When none succeeds the
//! synthetic generator takes over and the report carries a warning.

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Instant;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;

use crate::async_io::file_ops::{read_survey_file_async, survey_file_exists_async};
use crate::collections::HealthDataset;
use crate::config::LoaderConfig;
use crate::error::{Result, RiskEngineError};
use crate::survey::{RawRow, SyntheticConfig, generate_synthetic, normalize_rows};
use crate::utils::log_warning;
use crate::utils::logging::{create_spinner, finish_progress_bar};

/// Warning surfaced when the synthetic dataset replaces the survey
pub const FALLBACK_WARNING: &str = "Could not load the survey data from any candidate path; \
                                    using generated sample data for demonstration purposes.";

/// Source of raw survey rows
pub trait SurveySource {
    /// Whether a candidate is worth attempting
    fn exists<'a>(&'a self, path: &'a Path) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;

    /// Read every raw row of a candidate
    fn read_rows<'a>(
        &'a self,
        path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawRow>>> + Send + 'a>>;
}

/// Reads CSV or Parquet survey files from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSurveySource;

impl SurveySource for FileSurveySource {
    fn exists<'a>(&'a self, path: &'a Path) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(survey_file_exists_async(path))
    }

    fn read_rows<'a>(
        &'a self,
        path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RawRow>>> + Send + 'a>> {
        Box::pin(read_survey_file_async(path))
    }
}

/// Where the loaded dataset came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// A survey file
    File(PathBuf),
    /// The synthetic generator
    Synthetic,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Synthetic => write!(f, "generated sample data"),
        }
    }
}

/// Summary of a completed load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    /// Origin of the records
    pub source: DataSource,
    /// Raw rows read from the winning source
    pub rows_read: usize,
    /// Rows rejected by the normalizer
    pub rows_skipped: usize,
    /// Message for the user when the survey could not be loaded
    pub warning: Option<String>,
    /// Completion time
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    /// Whether the synthetic fallback was used
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Synthetic
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loaded {} rows from {} ({} skipped) at {}",
            self.rows_read,
            self.source,
            self.rows_skipped,
            self.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Dataset together with its load report
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Normalized, read-only records
    pub dataset: HealthDataset,
    /// How the records were obtained
    pub report: LoadReport,
}

async fn load_candidate<S: SurveySource + ?Sized>(
    source: &S,
    path: &Path,
    show_progress: bool,
) -> Result<LoadOutcome> {
    let spinner = show_progress
        .then(|| create_spinner(Some(format!("Reading {}", path.display()).as_str())));
    let rows = source.read_rows(path).await;
    if let Some(pb) = &spinner {
        finish_progress_bar(pb, "Survey file read");
    }
    let rows = rows?;
    let normalized = normalize_rows(&rows, show_progress);
    if normalized.records.is_empty() {
        return Err(RiskEngineError::EmptyDataset(path.to_path_buf()));
    }

    Ok(LoadOutcome {
        report: LoadReport {
            source: DataSource::File(path.to_path_buf()),
            rows_read: rows.len(),
            rows_skipped: normalized.skipped,
            warning: None,
            loaded_at: Utc::now(),
        },
        dataset: HealthDataset::new(normalized.records),
    })
}

/// Load the dataset from the first usable candidate of `source`
///
/// Never fails: ingestion errors are logged and end in the synthetic
/// fallback.
pub async fn load_dataset_from<S: SurveySource + ?Sized>(
    source: &S,
    config: &LoaderConfig,
    synthetic: &SyntheticConfig,
) -> LoadOutcome {
    let start = Instant::now();

    for path in &config.candidate_paths {
        if !source.exists(path).await {
            continue;
        }
        match load_candidate(source, path, config.show_progress).await {
            Ok(outcome) => {
                info!(
                    "Dataset ready: {} records from {} in {:?}",
                    outcome.dataset.len(),
                    path.display(),
                    start.elapsed()
                );
                return outcome;
            }
            Err(e) => log_warning(&format!("Failed to load survey data ({e})"), Some(path)),
        }
    }

    warn!("{FALLBACK_WARNING}");
    let records = generate_synthetic(synthetic);
    LoadOutcome {
        report: LoadReport {
            source: DataSource::Synthetic,
            rows_read: records.len(),
            rows_skipped: 0,
            warning: Some(FALLBACK_WARNING.to_string()),
            loaded_at: Utc::now(),
        },
        dataset: HealthDataset::new(records),
    }
}

/// Load the dataset from the local filesystem
pub async fn load_dataset(config: &LoaderConfig, synthetic: &SyntheticConfig) -> LoadOutcome {
    load_dataset_from(&FileSurveySource, config, synthetic).await
}
