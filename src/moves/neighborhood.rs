//! Neighborhood moves.

use rand::Rng;

use crate::model::{Assignment, Solution, TimetableConfig};

use super::generator::{pick_room, pick_slot};

/// Probability of drawing from the preference list when reassigning.
const REASSIGN_BIAS: f64 = 0.7;

/// Produces a neighbor of `solution` by one bounded mutation.
///
/// One uniform draw selects the move:
/// - below 0.45, two distinct assignments exchange their slots (or, less
///   often, swap wholesale);
/// - below 0.85, one assignment gets a preference-biased new slot and
///   usually a new room;
/// - otherwise, one assignment gets a new room only.
///
/// A single-assignment solution falls through from the swap arm to the
/// reassignment arm. The input is never modified; callers can keep the
/// original for the accept/reject comparison. An empty solution is
/// returned unchanged.
///
/// Catalogs are assumed non-empty; [`generate`](super::generate) checks
/// them before the search starts.
pub fn mutate<R: Rng>(
    solution: &[Assignment],
    config: &TimetableConfig,
    rng: &mut R,
) -> Solution {
    if solution.is_empty() {
        return Vec::new();
    }

    let mut next = solution.to_vec();
    let len = next.len();
    let move_kind: f64 = rng.random_range(0.0..1.0);

    if move_kind < 0.45 && len >= 2 {
        let i = rng.random_range(0..len);
        let mut j = rng.random_range(0..len);
        while j == i {
            j = rng.random_range(0..len);
        }
        if rng.random_bool(0.7) {
            // slots travel, courses and rooms stay put
            let slot_i = std::mem::take(&mut next[i].slot);
            next[i].slot = std::mem::replace(&mut next[j].slot, slot_i);
        } else {
            next.swap(i, j);
        }
    } else if move_kind < 0.85 {
        let idx = rng.random_range(0..len);
        let teacher = config.teacher_of(&next[idx].course);
        next[idx].slot = pick_slot(config, teacher, REASSIGN_BIAS, rng);
        if !rng.random_bool(0.25) {
            next[idx].room = pick_room(config, rng);
        }
    } else {
        let idx = rng.random_range(0..len);
        next[idx].room = pick_room(config, rng);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn config() -> TimetableConfig {
        TimetableConfig::new()
            .with_courses(["A", "B"])
            .with_teacher("A", "Khan")
            .with_teacher("B", "Ali")
            .with_rooms(["R1", "R2", "R3"])
            .with_slots(["Mon 09:00-10:00", "Tue 09:00-10:00", "Wed 09:00-10:00"])
    }

    fn solution() -> Vec<Assignment> {
        vec![
            Assignment::new("A", "Mon 09:00-10:00", "R1"),
            Assignment::new("A", "Tue 09:00-10:00", "R2"),
            Assignment::new("B", "Wed 09:00-10:00", "R3"),
        ]
    }

    #[test]
    fn test_empty_solution_is_stable() {
        let config = config();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(mutate(&[], &config, &mut rng).is_empty());
    }

    #[test]
    fn test_input_is_not_modified() {
        let config = config();
        let original = solution();
        let snapshot = original.clone();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let _ = mutate(&original, &config, &mut rng);
        }
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_course_multiset_is_preserved() {
        let config = config();
        let original = solution();
        let mut rng = StdRng::seed_from_u64(2);

        fn count(s: &[Assignment]) -> HashMap<&str, usize> {
            let mut m: HashMap<&str, usize> = HashMap::new();
            for a in s {
                *m.entry(a.course.as_str()).or_default() += 1;
            }
            m
        }
        let expected = count(&original);

        for _ in 0..200 {
            let next = mutate(&original, &config, &mut rng);
            assert_eq!(next.len(), original.len());
            assert_eq!(count(&next), expected);
        }
    }

    #[test]
    fn test_single_assignment_falls_through_to_reassignment() {
        let config = config();
        let original = vec![Assignment::new("A", "Mon 09:00-10:00", "R1")];
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let next = mutate(&original, &config, &mut rng);
            assert_eq!(next.len(), 1);
            assert_eq!(next[0].course, "A");
            assert!(config.slots.contains(&next[0].slot));
            assert!(config.rooms.contains(&next[0].room));
        }
    }

    #[test]
    fn test_mutation_changes_at_most_two_positions() {
        let config = config();
        let original = solution();
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..200 {
            let next = mutate(&original, &config, &mut rng);
            let changed = original
                .iter()
                .zip(&next)
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 2, "move touched {changed} positions");
        }
    }
}
