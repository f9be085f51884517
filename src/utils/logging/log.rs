//! Logging utilities
//!
//! This module provides standardized logging functions for pipeline steps.

use std::path::Path;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file or directory being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::debug!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file or directory that was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<std::time::Duration>,
) {
    log::info!("{}", completion_message(operation, path, items, elapsed));
}

fn completion_message(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<std::time::Duration>,
) -> String {
    match elapsed {
        Some(duration) => format!("{}: {operation} {items} rows in {duration:?}", path.display()),
        None => format!("{}: {operation} {items} items", path.display()),
    }
}

/// Log a step that produced rows without touching a file
pub fn log_step_complete(step: &str, rows: usize, elapsed: std::time::Duration) {
    log::info!("{step}: {rows} rows in {elapsed:?}");
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
