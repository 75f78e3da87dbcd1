//! Async file helpers for the dataset loader

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::Result;
use crate::survey::{RawRow, read_survey_file};

/// Whether `path` names an existing regular file
///
/// Permission and lookup errors count as absent.
pub async fn survey_file_exists_async(path: &Path) -> bool {
    match fs::metadata(path).await {
        Ok(metadata) => metadata.is_file(),
        Err(e) => {
            log::debug!("Candidate {} unavailable: {e}", path.display());
            false
        }
    }
}

/// Read a survey file on the blocking thread pool
///
/// # Errors
/// Returns an error if the file cannot be read or decoded, or if the
/// blocking task panics.
pub async fn read_survey_file_async(path: &Path) -> Result<Vec<RawRow>> {
    let owned: PathBuf = path.to_path_buf();
    tokio::task::spawn_blocking(move || read_survey_file(&owned)).await?
}
