use std::path::Path;

use colored::Colorize;

use crate::error::{FailureKind, LoadError};

/// Runs `protected`, resuming here with the failure's discriminant if it
/// (or anything it calls) fails.
///
/// This is the single recovery point of the recover discipline: the
/// originating OS error is logged and dropped, and only the discriminant
/// crosses the boundary.
pub fn run_protected<T, F>(protected: F) -> std::result::Result<T, FailureKind>
where
    F: FnOnce() -> std::result::Result<T, LoadError>,
{
    protected().map_err(|err| {
        log::debug!("recovery point reached: {err}");
        err.kind()
    })
}

/// Dispatches on a deposited discriminant value and reports to stderr.
///
/// Handlers are mutually exclusive; a value outside the known set falls
/// through to the generic handler. Returns the code unchanged for use as
/// the process exit status.
pub fn handle_failure(code: i32, path: &Path) -> i32 {
    let prefix = "Error:".red().bold();
    match FailureKind::from_code(code) {
        Some(FailureKind::FileNotFound) => {
            eprintln!("{prefix} File not found or cannot be opened: {}", path.display());
        }
        Some(FailureKind::ReadFailure) => {
            eprintln!("{prefix} Failed to read file: {}", path.display());
        }
        Some(FailureKind::MemoryAllocation) => {
            eprintln!("{prefix} Memory allocation failed");
        }
        None => {
            eprintln!("{prefix} Unknown error occurred");
        }
    }
    code
}
