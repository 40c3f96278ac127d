//! Post-run summary statistics.

use crate::cost::{CostEvaluator, Weights};
use crate::model::{Assignment, TimetableConfig};

/// Summary of a finished timetable, for the external textual report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleReport {
    /// Total weighted penalty of the timetable.
    pub final_cost: u64,

    /// Assignments placed into a slot the teacher prefers.
    pub preferred_hits: usize,

    /// Assignments whose teacher has a preference entry at all,
    /// including an empty one.
    pub preferred_total: usize,
}

/// Derives summary statistics from a finished solution.
///
/// Pure: never re-runs the search and never mutates its inputs.
pub fn analyze(
    solution: &[Assignment],
    config: &TimetableConfig,
    weights: &Weights,
) -> ScheduleReport {
    let mut evaluator = CostEvaluator::primed(config);
    let final_cost = evaluator.evaluate(solution, config, weights);

    let mut preferred_hits = 0;
    let mut preferred_total = 0;
    for assignment in solution {
        let teacher = config
            .faculty
            .get(&assignment.course)
            .map(String::as_str)
            .unwrap_or("");
        if let Some(prefs) = config.preferred_slots.get(teacher) {
            preferred_total += 1;
            if prefs.iter().any(|s| s == &assignment.slot) {
                preferred_hits += 1;
            }
        }
    }

    ScheduleReport {
        final_cost,
        preferred_hits,
        preferred_total,
    }
}
