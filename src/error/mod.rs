//! Error handling for the holiday pipeline.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while building a holiday annotation table
#[derive(Debug, thiserror::Error)]
pub enum HolidayGridError {
    /// Unknown country code, invalid match query or horizon
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Missing or malformed input file
    #[error("Data load error for {}: {message}", path.display())]
    DataLoadError {
        /// File or directory involved
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Error reading or writing delimited data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error opening or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid file discovery pattern
    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl HolidayGridError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }

    /// Create a data load error attached to a path
    pub fn data_load(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::DataLoadError {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

/// Result type for holiday pipeline operations
pub type Result<T> = std::result::Result<T, HolidayGridError>;
