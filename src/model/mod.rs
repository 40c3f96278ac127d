//! Configuration and solution data model.
//!
//! A [`TimetableConfig`] is the immutable input snapshot for one run; a
//! [`Solution`] is an ordered list of (course, slot, room) assignments.
//! Everything here is plain data — the search logic lives in the other
//! modules.

mod config;
mod types;

pub use config::{InvalidConfigurationError, TimetableConfig, DEFAULT_SESSIONS};
pub use types::{Assignment, Solution};
