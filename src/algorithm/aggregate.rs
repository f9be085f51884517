//! Aggregation of match results into the annotation table
//!
//! Starting from the grid projection `(Name, departure_date, ShortName)`,
//! each match result is full-outer-joined on `(Name, departure_date)` and
//! contributes one nullable holiday column. A key with several rows on
//! both sides of a join yields their product, so overlapping holidays show
//! up as duplicate keys in the output.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use itertools::iproduct;
use log::warn;

use crate::algorithm::grid::GridRow;
use crate::algorithm::matching::{MatchQuery, MatchResult};
use crate::error::{HolidayGridError, Result};
use crate::models::HolidayAnnotation;

const HOLIDAY_COLUMNS: usize = MatchQuery::ALL.len();

/// Rows collected for one `(Name, departure_date)` key
#[derive(Debug, Default)]
struct KeyGroup<'a> {
    short_names: Vec<Option<&'a str>>,
    columns: [Vec<Option<&'a str>>; HOLIDAY_COLUMNS],
}

/// Output of the aggregation step
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Rows sorted by `(Name, departure_date)`
    pub rows: Vec<HolidayAnnotation>,
    /// Number of keys that produced more than one row
    pub duplicate_keys: usize,
    /// Number of rows with at least one holiday column set
    pub holiday_rows: usize,
}

/// Outer-join the match results onto the grid
///
/// # Errors
/// Returns a configuration error when two results fill the same column.
pub fn aggregate<'a>(grid: &[GridRow<'a>], matches: &[MatchResult<'a>]) -> Result<Aggregation> {
    let mut seen = [false; HOLIDAY_COLUMNS];
    for result in matches {
        let column = result.query.column_index();
        if column >= HOLIDAY_COLUMNS || seen[column] {
            return Err(HolidayGridError::configuration(format!(
                "Match result for {} is given more than once",
                result.query.column_name()
            )));
        }
        seen[column] = true;
    }

    let mut groups: BTreeMap<(&'a str, NaiveDate), KeyGroup<'a>> = BTreeMap::new();

    for row in grid {
        groups
            .entry((row.subdivision.name.as_str(), row.departure_date))
            .or_default()
            .short_names
            .push(Some(row.subdivision.short_name.as_str()));
    }

    for result in matches {
        let column = result.query.column_index();
        for row in &result.rows {
            groups
                .entry((row.name, row.departure_date))
                .or_default()
                .columns[column]
                .push(row.holiday_name);
        }
    }

    let mut rows = Vec::with_capacity(groups.len());
    let mut duplicate_keys = 0;

    for ((name, departure_date), group) in &groups {
        let before = rows.len();
        let [school_regional, school_provincial, public_regional, public_national] =
            &group.columns;

        for (short_name, sr, sp, pr, pn) in iproduct!(
            or_null(&group.short_names),
            or_null(school_regional),
            or_null(school_provincial),
            or_null(public_regional),
            or_null(public_national)
        ) {
            rows.push(HolidayAnnotation {
                name: (*name).to_string(),
                departure_date: *departure_date,
                short_name: short_name.map(ToString::to_string),
                school_holiday_name_regional: sr.map(ToString::to_string),
                school_holiday_name_provincial: sp.map(ToString::to_string),
                public_holiday_name_regional: pr.map(ToString::to_string),
                public_holiday_name_national: pn.map(ToString::to_string),
            });
        }

        if rows.len() - before > 1 {
            duplicate_keys += 1;
        }
    }

    if duplicate_keys > 0 {
        warn!(
            "{duplicate_keys} (Name, departure_date) keys have overlapping holidays and appear on several rows"
        );
    }

    let holiday_rows = rows.iter().filter(|row| row.has_holiday()).count();

    Ok(Aggregation {
        rows,
        duplicate_keys,
        holiday_rows,
    })
}

/// Values of one side of an outer join; an absent side is a single null
fn or_null<'v, 'a>(values: &'v [Option<&'a str>]) -> &'v [Option<&'a str>] {
    if values.is_empty() { &[None] } else { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::grid::build_date_grid;
    use crate::algorithm::matching::MatchRow;
    use crate::config::Horizon;
    use crate::models::Subdivision;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn result<'a>(query: MatchQuery, rows: Vec<MatchRow<'a>>) -> MatchResult<'a> {
        MatchResult {
            query,
            rows,
            matching_time: Duration::ZERO,
        }
    }

    fn short_horizon() -> Horizon {
        Horizon::new(date(2025, 1, 1), date(2025, 1, 3)).unwrap()
    }

    #[test]
    fn test_grid_only_yields_null_columns() {
        let subdivisions = vec![Subdivision::new("Beta", "XX", "R2", "B")];
        let grid = build_date_grid(&subdivisions, &short_horizon());
        let aggregation = aggregate(&grid, &[]).unwrap();

        assert_eq!(aggregation.rows.len(), 3);
        assert_eq!(aggregation.duplicate_keys, 0);
        assert!(aggregation.rows.iter().all(|row| !row.has_holiday()));
        assert_eq!(aggregation.holiday_rows, 0);
        assert_eq!(aggregation.rows[0].short_name.as_deref(), Some("B"));
    }

    #[test]
    fn test_rows_sorted_by_name_then_date() {
        let subdivisions = vec![
            Subdivision::new("Beta", "XX", "R2", "B"),
            Subdivision::new("Alpha", "XX", "R1", "A"),
        ];
        let grid = build_date_grid(&subdivisions, &short_horizon());
        let aggregation = aggregate(&grid, &[]).unwrap();

        let keys: Vec<_> = aggregation
            .rows
            .iter()
            .map(|row| (row.name.as_str(), row.departure_date))
            .collect();
        assert_eq!(keys[0], ("Alpha", date(2025, 1, 1)));
        assert_eq!(keys[2], ("Alpha", date(2025, 1, 3)));
        assert_eq!(keys[3], ("Beta", date(2025, 1, 1)));
    }

    #[test]
    fn test_each_result_fills_its_column() {
        let subdivisions = vec![Subdivision::new("Alpha", "XX", "R1", "A")];
        let grid = build_date_grid(&subdivisions, &short_horizon());
        let matches = vec![
            result(
                MatchQuery::PUBLIC_NATIONAL,
                vec![MatchRow {
                    name: "Alpha",
                    departure_date: date(2025, 1, 1),
                    holiday_name: Some("New Year's Day"),
                }],
            ),
            result(
                MatchQuery::SCHOOL_PROVINCIAL,
                vec![MatchRow {
                    name: "Alpha",
                    departure_date: date(2025, 1, 2),
                    holiday_name: Some("Winter break"),
                }],
            ),
        ];

        let aggregation = aggregate(&grid, &matches).unwrap();
        assert_eq!(aggregation.rows.len(), 3);
        assert_eq!(
            aggregation.rows[0].public_holiday_name_national.as_deref(),
            Some("New Year's Day")
        );
        assert_eq!(aggregation.rows[0].school_holiday_name_provincial, None);
        assert_eq!(
            aggregation.rows[1].school_holiday_name_provincial.as_deref(),
            Some("Winter break")
        );
        assert!(!aggregation.rows[2].has_holiday());
        assert_eq!(aggregation.holiday_rows, 2);
    }

    #[test]
    fn test_overlapping_matches_multiply_rows() {
        let subdivisions = vec![Subdivision::new("Alpha", "XX", "R1", "A")];
        let grid = build_date_grid(&subdivisions, &short_horizon());
        let day = date(2025, 1, 2);
        let matches = vec![
            result(
                MatchQuery::SCHOOL_REGIONAL,
                vec![
                    MatchRow { name: "Alpha", departure_date: day, holiday_name: Some("Week") },
                    MatchRow { name: "Alpha", departure_date: day, holiday_name: Some("Day") },
                ],
            ),
            result(
                MatchQuery::PUBLIC_REGIONAL,
                vec![
                    MatchRow { name: "Alpha", departure_date: day, holiday_name: Some("Fiesta") },
                    MatchRow { name: "Alpha", departure_date: day, holiday_name: None },
                ],
            ),
        ];

        let aggregation = aggregate(&grid, &matches).unwrap();
        assert_eq!(aggregation.rows.len(), 2 + 4);
        assert_eq!(aggregation.duplicate_keys, 1);

        let on_day: Vec<_> = aggregation
            .rows
            .iter()
            .filter(|row| row.departure_date == day)
            .map(|row| {
                (
                    row.school_holiday_name_regional.as_deref(),
                    row.public_holiday_name_regional.as_deref(),
                )
            })
            .collect();
        assert_eq!(
            on_day,
            vec![
                (Some("Week"), Some("Fiesta")),
                (Some("Week"), None),
                (Some("Day"), Some("Fiesta")),
                (Some("Day"), None),
            ]
        );
    }

    #[test]
    fn test_duplicate_query_is_rejected() {
        let matches = vec![
            result(MatchQuery::PUBLIC_NATIONAL, Vec::new()),
            result(MatchQuery::PUBLIC_NATIONAL, Vec::new()),
        ];
        assert!(aggregate(&[], &matches).is_err());
    }
}
