//! Post-run analysis.

mod analyzer;

pub use analyzer::{analyze, ScheduleReport};
