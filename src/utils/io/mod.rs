//! IO utilities for file operations
//!
//! This module provides utilities for reading the semicolon-delimited
//! reference tables and writing the exported annotation tables.

pub mod delimited;

// Re-export commonly used functions for convenience
pub use delimited::{REFERENCE_DELIMITER, find_csv_files, read_csv_records, write_csv_records};
