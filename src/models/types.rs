//! Type definitions shared by the loaders and the matcher

use std::fmt;
use std::str::FromStr;

/// Which reference table a holiday comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayKind {
    /// Public (bank) holidays
    Public,
    /// School holidays
    School,
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "Public"),
            Self::School => write!(f, "School"),
        }
    }
}

/// Jurisdictional breadth a match is computed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Applies to every subdivision
    National,
    /// Applies to subdivisions whose parent region is listed
    Regional,
    /// Applies to subdivisions whose own code is listed
    Provincial,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::National => write!(f, "National"),
            Self::Regional => write!(f, "Regional"),
            Self::Provincial => write!(f, "Provincial"),
        }
    }
}

/// `RegionalScope` column of a holiday record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionalScope {
    National,
    Regional,
    Local,
}

impl FromStr for RegionalScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "national" => Ok(Self::National),
            "regional" => Ok(Self::Regional),
            "local" => Ok(Self::Local),
            other => Err(format!("Unknown regional scope: {other}")),
        }
    }
}
