//! Randomized construction and neighborhood operators.
//!
//! Both operators take an explicit RNG so runs are reproducible under a
//! fixed seed; neither mutates its input from the caller's perspective.

mod generator;
mod neighborhood;

pub use generator::generate;
pub use neighborhood::mutate;
