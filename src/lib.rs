//! A Rust library for annotating every day of a fixed horizon with the
//! public and school holidays that apply to each subdivision of a country.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{Horizon, PipelineConfig};
pub use error::{HolidayGridError, Result};
pub use models::{HolidayAnnotation, HolidayRecord, Subdivision};
pub use pipeline::{RunSummary, generate_holidays};

// Pipeline steps
pub use algorithm::{Matcher, aggregate, build_date_grid, create_date_range};
pub use loader::{import_and_filter_subdivisions, load_and_prepare_holidays};
