//! Utility functions for error handling
//!
//! Helpers that attach a bit of context before surfacing IO failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// Safely open a survey file, logging why it was needed on failure
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        log::debug!("{} is not a readable file (needed for {purpose})", path.display());
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found (needed for {purpose})", path.display()),
        )
        .into());
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "permission denied - check file permissions",
            _ => "failed to open file",
        };
        log::warn!("{}: {context} ({purpose})", path.display());
        e.into()
    })
}
