//! Reference table loading
//!
//! Reads the subdivision and holiday tables of one country and normalizes
//! them into [`Subdivision`] and [`HolidayRecord`] values.

use std::path::Path;

use chrono::NaiveDate;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::{CountryConfig, NameNormalization, PipelineConfig, country_config};
use crate::error::{HolidayGridError, Result};
use crate::models::holiday::{
    PublicHolidayRow, RawHolidayRecord, SchoolHolidayRow, parse_subdivision_codes,
};
use crate::models::subdivision::RawSubdivision;
use crate::models::{HolidayRecord, HolidayTables, RegionalScope, Subdivision};
use crate::utils::io::{find_csv_files, read_csv_records};
use crate::utils::locale::{LocalizedText, english_label};
use crate::utils::logging::log_warning;

/// Date format of `StartDate` / `EndDate`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load the subdivisions of a country at its holiday attribution level
///
/// # Errors
/// Returns a configuration error for an unknown country code and a data
/// load error when `subdivisions.csv` is missing or malformed.
pub fn import_and_filter_subdivisions(
    country_code: &str,
    config: &PipelineConfig,
) -> Result<Vec<Subdivision>> {
    let country = country_config(country_code)?;
    let path = config.subdivisions_path(country.code);
    let raw: Vec<RawSubdivision> = read_csv_records(&path, "loading subdivisions")?;

    let subdivisions: Vec<Subdivision> = raw
        .into_iter()
        .filter(|row| country.matches_category(&row.category))
        .map(|row| normalize_subdivision(country, row))
        .collect();

    if subdivisions.is_empty() {
        log_warning(
            &format!(
                "No subdivisions with category '{}' found",
                country.administrative_level_marker
            ),
            Some(&path),
        );
    }

    Ok(subdivisions)
}

/// Apply the country's name strategy to one subdivision row
#[must_use]
pub fn normalize_subdivision(country: &CountryConfig, row: RawSubdivision) -> Subdivision {
    let name = normalize_subdivision_name(country, &row.name).unwrap_or_else(|| {
        warn!(
            "Subdivision {} has no usable display name in '{}', using its code",
            row.short_name, row.name
        );
        row.short_name.clone()
    });

    Subdivision {
        name,
        country: row.country,
        parent: row.parent,
        short_name: row.short_name,
    }
}

/// Derive a display name from a raw `Name` field
#[must_use]
pub fn normalize_subdivision_name(country: &CountryConfig, raw: &str) -> Option<String> {
    match country.name_normalization {
        NameNormalization::ExtractLocaleToken => english_label(raw),
        NameNormalization::StripCountryPrefix => {
            let text = LocalizedText::parse(raw);
            text.get(&country.locale_prefix())
                .or_else(|| text.get(""))
                .map(ToString::to_string)
        }
    }
}

/// Load the public and school holidays of a country
///
/// School holidays may be split across several files; they are concatenated
/// in path order. No matching school file yields an empty school table and a
/// warning.
pub fn load_and_prepare_holidays(
    country_code: &str,
    config: &PipelineConfig,
) -> Result<HolidayTables> {
    let country = country_config(country_code)?;

    let public_path = config.public_holidays_path(country.code);
    let public = load_holiday_file::<PublicHolidayRow>(&public_path, "loading public holidays")?;

    let pattern = config.school_holidays_pattern(country.code);
    let school_files = find_csv_files(&pattern)?;
    if school_files.is_empty() {
        warn!(
            "No school holiday files found for {}; school holiday columns will be empty",
            country.code
        );
    }

    let mut school = Vec::new();
    for file in &school_files {
        school.extend(load_holiday_file::<SchoolHolidayRow>(
            file,
            "loading school holidays",
        )?);
    }

    debug!(
        "Loaded {} public and {} school holidays for {}",
        public.len(),
        school.len(),
        country.code
    );

    Ok(HolidayTables { public, school })
}

/// Read and normalize one holiday table
///
/// `R` is the on-disk row shape; every column it names is required.
pub fn load_holiday_file<R>(path: &Path, purpose: &str) -> Result<Vec<HolidayRecord>>
where
    R: DeserializeOwned + Into<RawHolidayRecord>,
{
    let raw: Vec<R> = read_csv_records(path, purpose)?;
    raw.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            prepare_holiday(row.into()).map_err(|message| {
                HolidayGridError::data_load(path, format!("line {}: {message}", idx + 2))
            })
        })
        .collect()
}

/// Normalize one raw holiday row
///
/// Splits the subdivision list, closes a missing end date with the start
/// date and derives the English holiday name.
pub fn prepare_holiday(row: RawHolidayRecord) -> std::result::Result<HolidayRecord, String> {
    let start_date = parse_date(&row.start_date)
        .ok_or_else(|| format!("invalid StartDate '{}'", row.start_date))?;
    let end_date = if row.end_date.trim().is_empty() {
        start_date
    } else {
        parse_date(&row.end_date).ok_or_else(|| format!("invalid EndDate '{}'", row.end_date))?
    };

    let regional_scope = row
        .regional_scope
        .as_deref()
        .map(str::trim)
        .filter(|scope| !scope.is_empty())
        .and_then(|scope| {
            scope
                .parse::<RegionalScope>()
                .inspect_err(|e| debug!("{e}; treating as unscoped"))
                .ok()
        });

    Ok(HolidayRecord {
        holiday_name: english_label(&row.name),
        subdivisions: parse_subdivision_codes(&row.subdivisions),
        name: row.name,
        start_date,
        end_date,
        regional_scope,
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
