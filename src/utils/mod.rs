//! Utility modules shared by the pipeline steps

pub mod io;
pub mod locale;
pub mod logging;
