//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use crate::cost::{CostEvaluator, Weights};
use crate::model::{InvalidConfigurationError, Solution, TimetableConfig};
use crate::moves;

/// Floor for the acceptance divisor, so a fully decayed temperature
/// never divides by zero.
const TEMPERATURE_EPSILON: f64 = 1e-9;

/// One history row, appended every iteration regardless of acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    /// 1-based iteration number.
    pub iteration: usize,

    /// Cost of the current solution after the accept/reject decision.
    pub current_cost: u64,

    /// Best cost seen so far.
    pub best_cost: u64,
}

/// Snapshot handed to the progress callback.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub iteration: usize,
    pub current_cost: u64,
    pub best_cost: u64,
    pub temperature: f64,
}

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best timetable found.
    pub best: Solution,

    /// Cost of the best timetable.
    pub best_cost: u64,

    /// Per-iteration cost trace, for progress charts.
    pub history: Vec<HistoryEntry>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Number of iterations actually executed.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the simulated-annealing search.
///
/// The runner owns the search state (current/best solution, temperature,
/// history) for exactly one run; nothing survives across runs except the
/// returned [`SaResult`].
pub struct SaRunner;

impl SaRunner {
    /// Runs the search with no cancellation token or progress callback.
    ///
    /// # Panics
    ///
    /// Panics when `sa` fails [`SaConfig::validate`]; parameter mistakes
    /// are programmer errors, unlike catalog-shape problems, which come
    /// back as [`InvalidConfigurationError`].
    pub fn run(
        config: &TimetableConfig,
        weights: &Weights,
        sa: &SaConfig,
    ) -> Result<SaResult, InvalidConfigurationError> {
        Self::run_with_hooks(config, weights, sa, None, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// # Panics
    ///
    /// Panics when `sa` fails [`SaConfig::validate`].
    pub fn run_with_cancel(
        config: &TimetableConfig,
        weights: &Weights,
        sa: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult, InvalidConfigurationError> {
        Self::run_with_hooks(config, weights, sa, cancel, None)
    }

    /// Runs the search with an optional cancellation token and progress
    /// callback.
    ///
    /// The cancel flag is consulted once per iteration; there is no
    /// mid-iteration preemption. The callback is invoked synchronously
    /// from inside the loop every [`SaConfig::progress_interval`]
    /// iterations, so it should return quickly.
    ///
    /// # Panics
    ///
    /// Panics when `sa` fails [`SaConfig::validate`].
    pub fn run_with_hooks(
        config: &TimetableConfig,
        weights: &Weights,
        sa: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut progress: Option<&mut dyn FnMut(&Progress)>,
    ) -> Result<SaResult, InvalidConfigurationError> {
        sa.validate().expect("invalid SaConfig");

        let start = Instant::now();
        let mut rng = match sa.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut evaluator = CostEvaluator::primed(config);

        // Initialize
        let mut current = moves::generate(config, &mut rng)?;
        let mut current_cost = evaluator.evaluate(&current, config, weights);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        info!(
            "annealing {} assignments: initial_cost={}, T0={}, alpha={}, max_iterations={}",
            current.len(),
            current_cost,
            sa.initial_temperature,
            sa.cooling_factor,
            sa.max_iterations
        );

        let mut temperature = sa.initial_temperature;
        let mut history = Vec::new();
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        for iteration in 1..=sa.max_iterations {
            if temperature <= sa.min_temperature {
                debug!("temperature floor reached at iteration {iteration}");
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let candidate = moves::mutate(&current, config, &mut rng);
            let candidate_cost = evaluator.evaluate(&candidate, config, weights);
            let delta = candidate_cost as f64 - current_cost as f64;

            if accept(delta, temperature, &mut rng) {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;
                if delta < 0.0 {
                    improving_moves += 1;
                }
                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            iterations = iteration;
            history.push(HistoryEntry {
                iteration,
                current_cost,
                best_cost,
            });

            if sa.progress_interval > 0 && iteration % sa.progress_interval == 0 {
                if let Some(callback) = progress.as_deref_mut() {
                    callback(&Progress {
                        iteration,
                        current_cost,
                        best_cost,
                        temperature,
                    });
                }
            }

            if sa.stop_on_zero_cost && best_cost == 0 {
                debug!("zero-cost timetable found at iteration {iteration}");
                break;
            }

            temperature *= sa.cooling_factor;
        }

        let elapsed = start.elapsed();
        info!(
            "annealing finished: best_cost={}, iterations={}, accepted={}, elapsed={:.2?}",
            best_cost, iterations, accepted_moves, elapsed
        );

        Ok(SaResult {
            best,
            best_cost,
            history,
            elapsed,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
        })
    }
}

/// Metropolis criterion: improving moves always pass, worsening moves
/// pass with probability `exp(-delta / T)` under a floored divisor.
fn accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    let probability = (-delta / temperature.max(TEMPERATURE_EPSILON)).exp();
    rng.random_range(0.0..1.0) < probability
}
