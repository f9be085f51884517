//! Per-country loading rules
//!
//! Each supported country has one record describing which subdivision rows
//! belong to the administrative level holidays are attributed to, and how the
//! display name of a subdivision is recovered from its raw `Name` field.

use crate::error::{HolidayGridError, Result};

/// How a subdivision's display name is derived from its raw `Name` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameNormalization {
    /// Raw name is `"<CC> <name>"`; drop the country-code prefix
    StripCountryPrefix,
    /// Raw name is a comma-separated multi-locale list; take the `EN` label
    ExtractLocaleToken,
}

/// Loading rules for one country
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryConfig {
    /// Lower-case ISO country code
    pub code: &'static str,
    /// Substring of the `Category` field marking the target administrative level
    pub administrative_level_marker: &'static str,
    /// Display name strategy
    pub name_normalization: NameNormalization,
}

impl CountryConfig {
    /// Upper-case code used as the locale prefix in raw names
    #[must_use]
    pub fn locale_prefix(&self) -> String {
        self.code.to_uppercase()
    }

    /// Whether a `Category` value belongs to the target administrative level
    #[must_use]
    pub fn matches_category(&self, category: &str) -> bool {
        category
            .to_lowercase()
            .contains(&self.administrative_level_marker.to_lowercase())
    }
}

/// All supported countries
pub const COUNTRIES: &[CountryConfig] = &[
    CountryConfig {
        code: "de",
        administrative_level_marker: "DE Bundesland",
        name_normalization: NameNormalization::ExtractLocaleToken,
    },
    CountryConfig {
        code: "es",
        administrative_level_marker: "EN province",
        name_normalization: NameNormalization::ExtractLocaleToken,
    },
    CountryConfig {
        code: "fr",
        administrative_level_marker: "EN department",
        name_normalization: NameNormalization::StripCountryPrefix,
    },
    CountryConfig {
        code: "it",
        administrative_level_marker: "EN province",
        name_normalization: NameNormalization::StripCountryPrefix,
    },
];

/// Look up the loading rules of a country (case-insensitive)
pub fn country_config(country_code: &str) -> Result<&'static CountryConfig> {
    COUNTRIES
        .iter()
        .find(|config| config.code.eq_ignore_ascii_case(country_code))
        .ok_or_else(|| {
            HolidayGridError::configuration(format!(
                "Unknown country code: {country_code} (supported: {})",
                COUNTRIES.iter().map(|c| c.code).collect::<Vec<_>>().join(", ")
            ))
        })
}
