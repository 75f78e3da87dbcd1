//! Log lines for survey loading
//!
//! Every file touched by the loader is announced, summarized and, on
//! failure, warned about with the same shape so runs are easy to grep.

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

/// Announce that work on `path` is starting, e.g. "Reading survey data from x.csv"
pub fn log_operation_start(operation: &str, path: &Path) {
    info!("{operation} {}", path.display());
}

/// Summarize a finished operation on `path`
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "read"
/// * `path` - Survey file
/// * `rows` - Number of rows handled
/// * `elapsed` - Wall time, when measured
pub fn log_operation_complete(operation: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    let path = path.display();
    match elapsed {
        Some(duration) => info!(
            "Successfully {operation} {rows} rows from {path} in {:.1} ms",
            duration.as_secs_f64() * 1000.0
        ),
        None => info!("Successfully {operation} {rows} rows from {path}"),
    }
}

/// Warn about a problem, naming the file when there is one
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => warn!("{message}: {}", path.display()),
        None => warn!("{message}"),
    }
}
