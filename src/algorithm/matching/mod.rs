//! Holiday matching against the date grid
//!
//! This module implements the four match queries of the pipeline:
//!
//! 1. School holidays joined on the parent region (regional)
//! 2. School holidays joined on the subdivision code (provincial)
//! 3. Public holidays joined on the parent region (regional)
//! 4. Public holidays applying to every subdivision (national)
//!
//! All four go through one parameterized [`Matcher::run`].

pub mod criteria;
pub mod matcher;
pub mod types;

// Re-export key types
pub use criteria::{JoinKey, MatchQuery};
pub use matcher::Matcher;
pub use types::{MatchResult, MatchRow};
