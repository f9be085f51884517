//! Type definitions for the matching step

use chrono::NaiveDate;
use std::time::Duration;

use crate::algorithm::matching::criteria::MatchQuery;

/// A grid row that falls inside a holiday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRow<'a> {
    /// Subdivision display name
    pub name: &'a str,
    pub departure_date: NaiveDate,
    /// English holiday name, `None` when the record carries no English label
    pub holiday_name: Option<&'a str>,
}

/// Result of one match query
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub query: MatchQuery,
    /// Matches in grid order, then holiday table order
    pub rows: Vec<MatchRow<'a>>,
    /// Time taken for matching
    pub matching_time: Duration,
}

impl MatchResult<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
