//! Simulated-annealing search loop.
//!
//! A single-solution trajectory search: mutate, evaluate, accept or
//! reject under the Metropolis criterion, cool. Worsening moves are
//! accepted with a probability that decays with temperature, letting the
//! search escape local optima. The search is not guaranteed to reach
//! zero cost; it always terminates cleanly with the best solution seen.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{HistoryEntry, Progress, SaResult, SaRunner};
