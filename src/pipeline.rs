//! End-to-end holiday table generation for one country

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::info;

use crate::algorithm::{Matcher, aggregate, build_date_grid};
use crate::algorithm::matching::{MatchQuery, MatchResult};
use crate::config::{PipelineConfig, country_config};
use crate::error::Result;
use crate::error::util::validate_directory;
use crate::loader::{import_and_filter_subdivisions, load_and_prepare_holidays};
use crate::models::{ANNOTATION_HEADER, HolidayAnnotation};
use crate::utils::io::write_csv_records;
use crate::utils::logging::log_step_complete;

/// Counts reported after a country has been processed
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub country: String,
    pub subdivisions: usize,
    pub grid_rows: usize,
    pub public_holidays: usize,
    pub school_holidays: usize,
    /// Match count per query, in column order
    pub matches: Vec<(MatchQuery, usize)>,
    pub output_rows: usize,
    /// Output rows with at least one holiday set
    pub holiday_rows: usize,
    /// Keys that appear on more than one output row
    pub duplicate_keys: usize,
    pub output_path: PathBuf,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Match count of one query
    #[must_use]
    pub fn matches_for(&self, query: MatchQuery) -> usize {
        self.matches
            .iter()
            .find(|(q, _)| *q == query)
            .map_or(0, |(_, count)| *count)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Holiday table for {}:", self.country)?;
        writeln!(f, "  Subdivisions: {}", self.subdivisions)?;
        writeln!(f, "  Grid rows: {}", self.grid_rows)?;
        writeln!(
            f,
            "  Holidays: {} public, {} school",
            self.public_holidays, self.school_holidays
        )?;
        for (query, count) in &self.matches {
            writeln!(f, "  {}: {count}", query.column_name())?;
        }
        writeln!(
            f,
            "  Output rows: {} ({} with a holiday)",
            self.output_rows, self.holiday_rows
        )?;
        if self.duplicate_keys > 0 {
            writeln!(f, "  Duplicate keys: {}", self.duplicate_keys)?;
        }
        writeln!(f, "  Written to: {}", self.output_path.display())?;
        writeln!(f, "  Elapsed: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Build and export the annotation table of one country
///
/// Loads the reference tables, crosses the subdivisions with every day of
/// the horizon, runs the four match queries, outer-joins the results and
/// writes `<country_code>_holidays.csv` to the output directory.
///
/// # Errors
/// Fails on an unknown country code or unreadable reference tables; no
/// output file is written in that case.
pub fn generate_holidays(country_code: &str, config: &PipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();
    let country = country_config(country_code)?;
    config.horizon.validate()?;
    validate_directory(&config.data_root, "reading holiday reference data")?;

    let subdivisions = import_and_filter_subdivisions(country.code, config)?;
    let holidays = load_and_prepare_holidays(country.code, config)?;

    let step = Instant::now();
    let grid = build_date_grid(&subdivisions, &config.horizon);
    log_step_complete("Date grid", grid.len(), step.elapsed());

    let matcher =
        Matcher::new(config.use_parallel).with_parallel_threshold(config.parallel_threshold);
    let matches = matcher.run_all(&grid, &holidays);
    log_step_complete(
        "Matching",
        matches.iter().map(MatchResult::len).sum(),
        matches.iter().map(|m| m.matching_time).sum(),
    );

    let step = Instant::now();
    let aggregation = aggregate(&grid, &matches)?;
    log_step_complete("Aggregation", aggregation.rows.len(), step.elapsed());

    let output_path = config.output_path(country.code);
    export_annotations(&output_path, &aggregation.rows, config)?;

    info!("Data has been refreshed for : {}", country.code);

    Ok(RunSummary {
        country: country.code.to_string(),
        subdivisions: subdivisions.len(),
        grid_rows: grid.len(),
        public_holidays: holidays.public.len(),
        school_holidays: holidays.school.len(),
        matches: matches.iter().map(|m| (m.query, m.len())).collect(),
        output_rows: aggregation.rows.len(),
        holiday_rows: aggregation.holiday_rows,
        duplicate_keys: aggregation.duplicate_keys,
        output_path,
        elapsed: start.elapsed(),
    })
}

/// Write the annotation table with its header row
pub fn export_annotations(
    path: &Path,
    rows: &[HolidayAnnotation],
    config: &PipelineConfig,
) -> Result<()> {
    write_csv_records(
        path,
        &ANNOTATION_HEADER,
        rows,
        config.output_delimiter,
        config.atomic_write,
    )
}
