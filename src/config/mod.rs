//! Configuration for the holiday pipeline.

pub mod country;

pub use country::{CountryConfig, NameNormalization, country_config};

use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::algorithm::Matcher;
use crate::error::{HolidayGridError, Result};

const DEFAULT_HORIZON_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default horizon start"),
};

const DEFAULT_HORIZON_END: NaiveDate = match NaiveDate::from_ymd_opt(2026, 12, 31) {
    Some(date) => date,
    None => panic!("invalid default horizon end"),
};

/// Inclusive date range over which holiday coverage is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    /// First day of the horizon (inclusive)
    pub start: NaiveDate,
    /// Last day of the horizon (inclusive)
    pub end: NaiveDate,
}

impl Horizon {
    /// Create a horizon, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let horizon = Self { start, end };
        horizon.validate()?;
        Ok(horizon)
    }

    /// Reject a horizon whose end lies before its start
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(HolidayGridError::configuration(format!(
                "Horizon end {} is before start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Number of days covered, both ends included
    #[must_use]
    pub fn num_days(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self {
            start: DEFAULT_HORIZON_START,
            end: DEFAULT_HORIZON_END,
        }
    }
}

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding one sub-directory of reference tables per country
    pub data_root: PathBuf,
    /// Directory the `<country>_holidays.csv` files are written to
    pub output_dir: PathBuf,
    /// Date range of the grid
    pub horizon: Horizon,
    /// Delimiter of the exported file
    pub output_delimiter: u8,
    /// Match grid rows in parallel for large grids
    pub use_parallel: bool,
    /// Grid size from which parallel matching kicks in
    pub parallel_threshold: usize,
    /// Write to a temporary file and rename it into place
    pub atomic_write: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("data/src"),
            output_dir: PathBuf::from("."),
            horizon: Horizon::default(),
            output_delimiter: b',',
            use_parallel: true,
            parallel_threshold: Matcher::PARALLEL_THRESHOLD,
            atomic_write: true,
        }
    }
}

impl PipelineConfig {
    /// Set the directory the reference tables are read from
    #[must_use]
    pub fn with_data_root(mut self, data_root: impl Into<PathBuf>) -> Self {
        self.data_root = data_root.into();
        self
    }

    /// Set the directory output files are written to
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    #[must_use]
    pub fn with_output_delimiter(mut self, delimiter: u8) -> Self {
        self.output_delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_atomic_write(mut self, atomic_write: bool) -> Self {
        self.atomic_write = atomic_write;
        self
    }

    /// Directory holding the reference tables of one country
    #[must_use]
    pub fn country_dir(&self, country_code: &str) -> PathBuf {
        self.data_root.join(country_code.to_lowercase())
    }

    /// Path of the subdivision reference table
    #[must_use]
    pub fn subdivisions_path(&self, country_code: &str) -> PathBuf {
        self.country_dir(country_code).join("subdivisions.csv")
    }

    /// Path of the public holiday reference table
    #[must_use]
    pub fn public_holidays_path(&self, country_code: &str) -> PathBuf {
        self.country_dir(country_code)
            .join("holidays")
            .join("holidays.public.csv")
    }

    /// Glob pattern matching every school holiday reference table
    #[must_use]
    pub fn school_holidays_pattern(&self, country_code: &str) -> String {
        let dir = self.country_dir(country_code).join("holidays");
        format!("{}/*holidays.school*.csv", escape_pattern(&dir))
    }

    /// Path of the exported annotation table
    #[must_use]
    pub fn output_path(&self, country_code: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_holidays.csv", country_code.to_lowercase()))
    }
}

fn escape_pattern(dir: &Path) -> String {
    glob::Pattern::escape(&dir.to_string_lossy())
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        writeln!(f, "  Data Root: {}", self.data_root.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(f, "  Horizon: {} to {}", self.horizon.start, self.horizon.end)?;
        writeln!(f, "  Output Delimiter: {:?}", char::from(self.output_delimiter))?;
        writeln!(
            f,
            "  Parallel Matching: {} (from {} rows)",
            self.use_parallel, self.parallel_threshold
        )?;
        writeln!(f, "  Atomic Write: {}", self.atomic_write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_horizon_covers_two_years() {
        let horizon = Horizon::default();
        assert_eq!(horizon.start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(horizon.end, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        assert_eq!(horizon.num_days(), 730);
    }

    #[test]
    fn test_horizon_rejects_reversed_range() {
        let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(Horizon::new(start, end).is_err());
        assert!(Horizon { start, end }.validate().is_err());
        assert_eq!(Horizon::new(start, start).unwrap().num_days(), 1);
    }

    #[test]
    fn test_paths_follow_country_layout() {
        let config = PipelineConfig::default()
            .with_data_root("/tmp/data/src")
            .with_output_dir("/tmp/out");
        assert_eq!(
            config.subdivisions_path("ES"),
            PathBuf::from("/tmp/data/src/es/subdivisions.csv")
        );
        assert_eq!(
            config.public_holidays_path("es"),
            PathBuf::from("/tmp/data/src/es/holidays/holidays.public.csv")
        );
        assert_eq!(
            config.school_holidays_pattern("es"),
            "/tmp/data/src/es/holidays/*holidays.school*.csv"
        );
        assert_eq!(
            config.output_path("es"),
            PathBuf::from("/tmp/out/es_holidays.csv")
        );
    }
}
