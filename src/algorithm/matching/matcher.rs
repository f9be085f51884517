//! Holiday matching
//!
//! One parameterized operation joins the date grid against a holiday table
//! and keeps the rows whose date lies inside the holiday interval. Keyed
//! queries expand each holiday by its subdivision codes first.

use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;

use crate::algorithm::grid::GridRow;
use crate::algorithm::matching::criteria::{JoinKey, MatchQuery};
use crate::algorithm::matching::types::{MatchResult, MatchRow};
use crate::models::{HolidayRecord, HolidayTables, Subdivision};

/// Candidate holidays of a query, indexed by join key
enum HolidayIndex<'a> {
    Unkeyed(Vec<&'a HolidayRecord>),
    Keyed {
        key: JoinKey,
        by_code: FxHashMap<&'a str, Vec<&'a HolidayRecord>>,
    },
}

impl<'a> HolidayIndex<'a> {
    fn build(query: MatchQuery, holidays: &'a [HolidayRecord]) -> Self {
        let candidates = holidays.iter().filter(|holiday| query.accepts(holiday));

        match query.join_key() {
            JoinKey::None => Self::Unkeyed(candidates.collect()),
            key => {
                let mut by_code: FxHashMap<&'a str, Vec<&'a HolidayRecord>> =
                    FxHashMap::default();
                for holiday in candidates {
                    for code in &holiday.subdivisions {
                        by_code.entry(code.as_str()).or_default().push(holiday);
                    }
                }
                Self::Keyed { key, by_code }
            }
        }
    }

    fn candidates(&self, subdivision: &Subdivision) -> &[&'a HolidayRecord] {
        match self {
            Self::Unkeyed(holidays) => holidays.as_slice(),
            Self::Keyed { key, by_code } => key
                .key_of(subdivision)
                .and_then(|code| by_code.get(code))
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }
}

/// Runs match queries against a date grid
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    use_parallel: bool,
    parallel_threshold: usize,
}

impl Matcher {
    /// Grid size above which parallel matching is used
    pub const PARALLEL_THRESHOLD: usize = 10_000;

    #[must_use]
    pub const fn new(use_parallel: bool) -> Self {
        Self {
            use_parallel,
            parallel_threshold: Self::PARALLEL_THRESHOLD,
        }
    }

    /// Use parallel matching from `threshold` grid rows on
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Match the grid against the holidays of one query
    ///
    /// Every matching (grid row, holiday) pair is kept, so overlapping
    /// holidays produce several rows for the same subdivision and date.
    #[must_use]
    pub fn run<'a>(
        &self,
        query: MatchQuery,
        grid: &[GridRow<'a>],
        holidays: &'a [HolidayRecord],
    ) -> MatchResult<'a> {
        let start_time = Instant::now();
        let index = HolidayIndex::build(query, holidays);

        let match_row = |row: &GridRow<'a>| {
            index
                .candidates(row.subdivision)
                .iter()
                .copied()
                .filter(|holiday| holiday.contains(row.departure_date))
                .map(|holiday| MatchRow {
                    name: row.subdivision.name.as_str(),
                    departure_date: row.departure_date,
                    holiday_name: holiday.holiday_name.as_deref(),
                })
                .collect::<Vec<_>>()
        };

        let rows: Vec<MatchRow<'a>> =
            if self.use_parallel && grid.len() >= self.parallel_threshold {
                grid.par_iter().flat_map_iter(match_row).collect()
            } else {
                grid.iter().flat_map(match_row).collect()
            };

        let elapsed = start_time.elapsed();
        info!(
            "{} {} holidays: {} matches over {} grid rows in {:.2?}",
            query.scope,
            query.kind,
            rows.len(),
            grid.len(),
            elapsed
        );

        MatchResult {
            query,
            rows,
            matching_time: elapsed,
        }
    }

    /// Run every query against its holiday table
    #[must_use]
    pub fn run_all<'a>(
        &self,
        grid: &[GridRow<'a>],
        holidays: &'a HolidayTables,
    ) -> Vec<MatchResult<'a>> {
        MatchQuery::ALL
            .iter()
            .map(|&query| self.run(query, grid, holidays.of_kind(query.kind)))
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(true)
    }
}
