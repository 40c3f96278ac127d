//! Weighted penalty evaluation.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::model::{Assignment, TimetableConfig};
use crate::slots::SlotIndex;

use super::weights::Weights;

/// Computes the scalar penalty of a candidate solution.
///
/// Evaluation is deterministic: the only state carried between calls is
/// the [`SlotIndex`] parse cache, which is pure memoization and cannot
/// change a result. Call [`invalidate`](CostEvaluator::invalidate) when
/// the slot catalog changes.
#[derive(Debug, Clone, Default)]
pub struct CostEvaluator {
    slots: SlotIndex,
}

impl CostEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the parse cache pre-filled from the
    /// configuration's slot catalog. Malformed labels are skipped; they
    /// are charged per use at evaluation time.
    pub fn primed(config: &TimetableConfig) -> Self {
        let mut evaluator = Self::new();
        evaluator.slots.prime(&config.slots);
        evaluator
    }

    /// Clears the parse cache. Must be called when the slot catalog
    /// changes between runs; [`prime`](SlotIndex::prime) may then be
    /// used to re-fill it eagerly.
    pub fn invalidate(&mut self) {
        self.slots.invalidate();
    }

    /// Access to the underlying slot index, for re-priming.
    pub fn slot_index_mut(&mut self) -> &mut SlotIndex {
        &mut self.slots
    }

    /// Total weighted penalty of `solution`. Lower is better, 0 is ideal.
    pub fn evaluate(
        &mut self,
        solution: &[Assignment],
        config: &TimetableConfig,
        weights: &Weights,
    ) -> u64 {
        let mut penalty = 0u64;
        let mut used_faculty: HashSet<(&str, &str)> = HashSet::new();
        let mut used_rooms: HashSet<(&str, &str)> = HashSet::new();
        // (teacher, day) -> start minutes, for the workload post-pass
        let mut day_schedule: HashMap<(&str, String), Vec<u32>> = HashMap::new();

        for assignment in solution {
            let Some(teacher) = config.teacher_of(&assignment.course) else {
                penalty += weights.missing_teacher;
                continue;
            };

            if !used_faculty.insert((teacher, assignment.slot.as_str())) {
                penalty += weights.teacher_slot_conflict;
            }
            if !used_rooms.insert((assignment.room.as_str(), assignment.slot.as_str())) {
                penalty += weights.room_slot_conflict;
            }

            if let Some(prefs) = config.preferences_for(teacher) {
                if !prefs.is_empty() && !prefs.iter().any(|s| s == &assignment.slot) {
                    penalty += weights.not_preferred;
                }
            }

            match self.slots.parse(&assignment.slot) {
                Ok(parsed) => day_schedule
                    .entry((teacher, parsed.day))
                    .or_default()
                    .push(parsed.start_minute),
                Err(_) => penalty += weights.malformed_slot,
            }
        }

        for starts in day_schedule.values_mut() {
            starts.sort_unstable();

            let n = starts.len() as u64;
            if n >= 5 {
                penalty += weights.too_many_sessions_day * (n - 4);
            }

            for (earlier, later) in starts.iter().tuple_windows() {
                // A difference of exactly 0 contributes nothing here;
                // identical labels were already charged as a teacher
                // conflict above.
                let diff = later - earlier;
                if diff > 0 && diff <= 60 {
                    penalty += weights.back_to_back;
                } else if diff > 60 {
                    penalty += weights.gap;
                }
            }
        }

        penalty
    }
}
