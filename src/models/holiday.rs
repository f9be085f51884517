//! Holiday record model
//!
//! Public and school holidays share one record shape. Multi-valued
//! subdivision lists are parsed once at load time and open-ended intervals
//! are closed by backfilling the end date.

use chrono::NaiveDate;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::models::types::{HolidayKind, RegionalScope};

/// Subdivision codes a holiday applies to
pub type SubdivisionCodes = SmallVec<[String; 4]>;

/// Row of `holidays.public.csv` as stored on disk
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublicHolidayRow {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub subdivisions: String,
    pub regional_scope: String,
}

/// Row of a school holiday table as stored on disk
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchoolHolidayRow {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub subdivisions: String,
}

/// Holiday row before date parsing, common to both tables
///
/// School tables carry no `RegionalScope` column.
#[derive(Debug, Clone)]
pub struct RawHolidayRecord {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub subdivisions: String,
    pub regional_scope: Option<String>,
}

impl From<PublicHolidayRow> for RawHolidayRecord {
    fn from(row: PublicHolidayRow) -> Self {
        Self {
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            subdivisions: row.subdivisions,
            regional_scope: Some(row.regional_scope),
        }
    }
}

impl From<SchoolHolidayRow> for RawHolidayRecord {
    fn from(row: SchoolHolidayRow) -> Self {
        Self {
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            subdivisions: row.subdivisions,
            regional_scope: None,
        }
    }
}

/// A normalized holiday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    /// Raw multi-locale name
    pub name: String,
    /// First day (inclusive)
    pub start_date: NaiveDate,
    /// Last day (inclusive); equals `start_date` for single-day holidays
    pub end_date: NaiveDate,
    /// Subdivision codes; empty means nationwide for public holidays
    pub subdivisions: SubdivisionCodes,
    pub regional_scope: Option<RegionalScope>,
    /// English label derived from `name`
    pub holiday_name: Option<String>,
}

impl HolidayRecord {
    /// Whether `date` falls inside the holiday, both ends included
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Split a comma-joined subdivision field into codes
#[must_use]
pub fn parse_subdivision_codes(field: &str) -> SubdivisionCodes {
    field
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// The public and school holidays of one country
#[derive(Debug, Clone, Default)]
pub struct HolidayTables {
    pub public: Vec<HolidayRecord>,
    pub school: Vec<HolidayRecord>,
}

impl HolidayTables {
    /// Holidays of one kind
    #[must_use]
    pub fn of_kind(&self, kind: HolidayKind) -> &[HolidayRecord] {
        match kind {
            HolidayKind::Public => &self.public,
            HolidayKind::School => &self.school,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let record = HolidayRecord {
            name: "EN Spring break".to_string(),
            start_date: date(2025, 3, 10),
            end_date: date(2025, 3, 14),
            subdivisions: parse_subdivision_codes("R1"),
            regional_scope: Some(RegionalScope::Regional),
            holiday_name: Some("Spring break".to_string()),
        };
        assert!(!record.contains(date(2025, 3, 9)));
        assert!(record.contains(date(2025, 3, 10)));
        assert!(record.contains(date(2025, 3, 14)));
        assert!(!record.contains(date(2025, 3, 15)));
    }

    #[test]
    fn test_parse_subdivision_codes() {
        assert_eq!(
            parse_subdivision_codes("ES-AN, ES-AR,ES-CT").as_slice(),
            ["ES-AN", "ES-AR", "ES-CT"]
        );
        assert!(parse_subdivision_codes("").is_empty());
        assert!(parse_subdivision_codes(" , ").is_empty());
    }
}
