//! Domain models for the holiday pipeline
//!
//! Subdivisions and holiday records are loaded from the reference tables;
//! annotations are the rows of the exported table.

pub mod annotation;
pub mod holiday;
pub mod subdivision;
pub mod types;

// Re-export commonly used types
pub use annotation::{ANNOTATION_HEADER, HolidayAnnotation};
pub use holiday::{HolidayRecord, HolidayTables, SubdivisionCodes};
pub use subdivision::Subdivision;
pub use types::{HolidayKind, RegionalScope, Scope};
