//! Subdivision model
//!
//! An administrative unit (province, department, Bundesland) at the level
//! holidays are attributed to.

use serde::Deserialize;

/// Row of `subdivisions.csv` as stored on disk
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSubdivision {
    pub name: String,
    pub category: String,
    pub country: String,
    pub parent: String,
    pub short_name: String,
}

/// A subdivision with its normalized display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdivision {
    /// Human-readable name, unique within a country
    pub name: String,
    /// Country code as given in the reference table
    pub country: String,
    /// Code of the parent region
    pub parent: String,
    /// Code of the subdivision itself
    pub short_name: String,
}

impl Subdivision {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        parent: impl Into<String>,
        short_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            parent: parent.into(),
            short_name: short_name.into(),
        }
    }
}
