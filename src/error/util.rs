//! Utility functions for error handling
//!
//! These helpers attach the offending path and the reason a file was needed
//! to the underlying I/O failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{HolidayGridError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(HolidayGridError::data_load(
            path,
            format!("File not found (needed for: {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(HolidayGridError::data_load(
            path,
            format!("Path is not a file (expected a file for: {purpose})"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for {purpose}: {e}"),
        };
        HolidayGridError::data_load(path, context)
    })
}

/// Check if a directory exists and is readable, with rich error information
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(HolidayGridError::data_load(
            path,
            format!("Directory not found (needed for: {purpose})"),
        ));
    }

    if !path.is_dir() {
        return Err(HolidayGridError::data_load(
            path,
            format!("Path is not a directory (expected a directory for: {purpose})"),
        ));
    }

    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check directory permissions".to_string()
                }
                _ => format!("Failed to access directory for {purpose}: {e}"),
            };
            Err(HolidayGridError::data_load(path, context))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path_and_purpose() {
        let path = Path::new("does/not/exist.csv");
        let err = safe_open_file(path, "reading subdivisions").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("does/not/exist.csv"));
        assert!(message.contains("reading subdivisions"));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let err = validate_directory(Path::new("Cargo.toml"), "holiday data").unwrap_err();
        assert!(matches!(err, HolidayGridError::DataLoadError { .. }));
    }
}
