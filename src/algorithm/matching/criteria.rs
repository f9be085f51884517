//! Match query definition
//!
//! A query names the holiday table, the scope filter applied to it and the
//! grid column joined against the holiday's subdivision codes.

use crate::models::{HolidayKind, HolidayRecord, RegionalScope, Scope, Subdivision};

/// Grid column joined against a holiday's subdivision codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKey {
    /// No key; every holiday is a candidate for every grid row
    None,
    /// The subdivision's parent region code
    Parent,
    /// The subdivision's own code
    ShortName,
}

impl JoinKey {
    /// Key value of a subdivision, `None` for unkeyed joins
    #[must_use]
    pub fn key_of<'a>(&self, subdivision: &'a Subdivision) -> Option<&'a str> {
        match self {
            Self::None => None,
            Self::Parent => Some(subdivision.parent.as_str()),
            Self::ShortName => Some(subdivision.short_name.as_str()),
        }
    }
}

/// One (holiday type, scope) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchQuery {
    pub kind: HolidayKind,
    pub scope: Scope,
}

impl MatchQuery {
    pub const SCHOOL_REGIONAL: Self = Self {
        kind: HolidayKind::School,
        scope: Scope::Regional,
    };
    pub const SCHOOL_PROVINCIAL: Self = Self {
        kind: HolidayKind::School,
        scope: Scope::Provincial,
    };
    pub const PUBLIC_REGIONAL: Self = Self {
        kind: HolidayKind::Public,
        scope: Scope::Regional,
    };
    pub const PUBLIC_NATIONAL: Self = Self {
        kind: HolidayKind::Public,
        scope: Scope::National,
    };

    /// Every valid query, in output column order
    pub const ALL: [Self; 4] = [
        Self::SCHOOL_REGIONAL,
        Self::SCHOOL_PROVINCIAL,
        Self::PUBLIC_REGIONAL,
        Self::PUBLIC_NATIONAL,
    ];

    #[must_use]
    pub const fn join_key(&self) -> JoinKey {
        match self.scope {
            Scope::National => JoinKey::None,
            Scope::Regional => JoinKey::Parent,
            Scope::Provincial => JoinKey::ShortName,
        }
    }

    /// `RegionalScope` a holiday must carry to take part in the query
    ///
    /// School holidays are not filtered by scope.
    #[must_use]
    pub const fn scope_filter(&self) -> Option<RegionalScope> {
        match (self.kind, self.scope) {
            (HolidayKind::Public, Scope::National) => Some(RegionalScope::National),
            (HolidayKind::Public, _) => Some(RegionalScope::Regional),
            (HolidayKind::School, _) => None,
        }
    }

    /// Whether a holiday passes the scope filter
    #[must_use]
    pub fn accepts(&self, holiday: &HolidayRecord) -> bool {
        self.scope_filter()
            .is_none_or(|scope| holiday.regional_scope == Some(scope))
    }

    /// Position of the query's column among the holiday columns
    #[must_use]
    pub fn column_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|query| query == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Name of the output column the query fills
    #[must_use]
    pub const fn column_name(&self) -> &'static str {
        match (self.kind, self.scope) {
            (HolidayKind::School, Scope::Provincial) => "School_Holiday_name_provincial",
            (HolidayKind::School, _) => "School_Holiday_name_regional",
            (HolidayKind::Public, Scope::National) => "Public_Holiday_name_national",
            (HolidayKind::Public, _) => "Public_Holiday_name_regional",
        }
    }
}
