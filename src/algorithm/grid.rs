//! Date grid construction
//!
//! The grid is the cross product of every subdivision with every day of the
//! horizon. It is the left side of every holiday match and the base of the
//! aggregated table.

use chrono::NaiveDate;

use crate::config::Horizon;
use crate::models::Subdivision;

/// One (subdivision, day) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRow<'a> {
    pub subdivision: &'a Subdivision,
    pub departure_date: NaiveDate,
}

/// Every day from `start` to `end`, both included
#[must_use]
pub fn create_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Cross join subdivisions with the days of the horizon
///
/// Rows are ordered by subdivision (input order), then by date.
#[must_use]
pub fn build_date_grid<'a>(subdivisions: &'a [Subdivision], horizon: &Horizon) -> Vec<GridRow<'a>> {
    let mut grid = Vec::with_capacity(subdivisions.len() * horizon.num_days());
    let dates = create_date_range(horizon.start, horizon.end);
    for subdivision in subdivisions {
        grid.extend(dates.iter().map(|&departure_date| GridRow {
            subdivision,
            departure_date,
        }));
    }
    grid
}
