//! Output row of the holiday annotation table

use chrono::NaiveDate;
use serde::Serialize;

/// Column names of the exported table, in order
pub const ANNOTATION_HEADER: [&str; 7] = [
    "Name",
    "departure_date",
    "ShortName",
    "School_Holiday_name_regional",
    "School_Holiday_name_provincial",
    "Public_Holiday_name_regional",
    "Public_Holiday_name_national",
];

/// One (subdivision, date) row with the holidays that apply to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayAnnotation {
    #[serde(rename = "Name")]
    pub name: String,
    pub departure_date: NaiveDate,
    #[serde(rename = "ShortName")]
    pub short_name: Option<String>,
    #[serde(rename = "School_Holiday_name_regional")]
    pub school_holiday_name_regional: Option<String>,
    #[serde(rename = "School_Holiday_name_provincial")]
    pub school_holiday_name_provincial: Option<String>,
    #[serde(rename = "Public_Holiday_name_regional")]
    pub public_holiday_name_regional: Option<String>,
    #[serde(rename = "Public_Holiday_name_national")]
    pub public_holiday_name_national: Option<String>,
}

impl HolidayAnnotation {
    /// Whether any holiday column is set
    #[must_use]
    pub const fn has_holiday(&self) -> bool {
        self.school_holiday_name_regional.is_some()
            || self.school_holiday_name_provincial.is_some()
            || self.public_holiday_name_regional.is_some()
            || self.public_holiday_name_national.is_some()
    }
}
