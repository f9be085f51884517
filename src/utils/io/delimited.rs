//! Delimited file reading and writing
//!
//! Reference tables are semicolon-delimited with a header row. Empty fields
//! stay empty strings; nothing is coerced to a missing marker.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use itertools::Itertools;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::util::{safe_open_file, validate_directory};
use crate::error::{HolidayGridError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Delimiter of the reference tables
pub const REFERENCE_DELIMITER: u8 = b';';

/// Read every row of a reference table into typed records
///
/// # Arguments
/// * `path` - The file to read
/// * `purpose` - Why the file is read (for error context)
///
/// # Errors
/// Returns a data load error when the file is missing, a required column is
/// absent or a row cannot be decoded.
pub fn read_csv_records<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<Vec<T>> {
    log_operation_start("Reading", path);
    let start = Instant::now();

    let file = safe_open_file(path, purpose)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(REFERENCE_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let records = reader
        .deserialize::<T>()
        .enumerate()
        .map(|(idx, row)| {
            // header is line 1
            row.map_err(|e| {
                HolidayGridError::data_load(path, format!("Invalid row at line {}: {e}", idx + 2))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log_operation_complete("read", path, records.len(), Some(start.elapsed()));
    Ok(records)
}

/// Find the files matching a glob pattern, sorted by path
///
/// The directory part of the pattern must exist; zero matches is not an
/// error and is left to the caller to report.
pub fn find_csv_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern_path = Path::new(pattern);
    if let Some(dir) = pattern_path.parent() {
        log_operation_start("Searching for files in", dir);
        validate_directory(dir, "discovering reference tables")?;
    }

    let files = glob::glob(pattern)?
        .map(|entry| {
            entry.map_err(|e| {
                HolidayGridError::data_load(e.path(), format!("Failed to read entry: {}", e.error()))
            })
        })
        .filter_ok(|path| path.is_file())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    if let Some(dir) = pattern_path.parent() {
        log_operation_complete("found", dir, files.len(), None);
    }

    Ok(files)
}

/// Write a header and rows to a delimited file
///
/// With `atomic` set the rows go to a sibling `.tmp` file that is renamed
/// into place once complete, so a failed write leaves no partial file.
pub fn write_csv_records<T: Serialize>(
    path: &Path,
    header: &[&str],
    rows: &[T],
    delimiter: u8,
    atomic: bool,
) -> Result<()> {
    log_operation_start("Writing", path);
    let start = Instant::now();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let target = if atomic { temporary_path(path) } else { path.to_path_buf() };

    let written = write_rows(&target, header, rows, delimiter);
    if let Err(e) = written {
        if atomic {
            let _ = fs::remove_file(&target);
        }
        return Err(e);
    }

    if atomic {
        fs::rename(&target, path)?;
    }

    log_operation_complete("wrote", path, rows.len(), Some(start.elapsed()));
    Ok(())
}

fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T], delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_path_is_sibling() {
        assert_eq!(
            temporary_path(Path::new("out/es_holidays.csv")),
            PathBuf::from("out/es_holidays.csv.tmp")
        );
    }

    #[test]
    fn test_no_matching_files_is_empty_not_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let pattern = format!(
            "{}/*holidays.school*.csv",
            glob::Pattern::escape(&dir.path().to_string_lossy())
        );
        assert!(find_csv_files(&pattern).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_data_load_error() {
        let err = find_csv_files("no/such/dir/*holidays.school*.csv").unwrap_err();
        assert!(matches!(err, HolidayGridError::DataLoadError { .. }));
    }
}
