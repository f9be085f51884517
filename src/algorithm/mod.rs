//! Algorithm implementations for the holiday pipeline
//!
//! Grid construction, holiday matching and aggregation of the match
//! results into the annotation table.

pub mod aggregate;
pub mod grid;
pub mod matching;

pub use aggregate::{Aggregation, aggregate};
pub use grid::{GridRow, build_date_grid, create_date_range};
pub use matching::{MatchQuery, MatchResult, Matcher};
