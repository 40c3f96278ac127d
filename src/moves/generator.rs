//! Random initial construction.

use rand::Rng;

use crate::model::{Assignment, InvalidConfigurationError, Solution, TimetableConfig};

/// Probability of drawing from the preference list during construction.
const CONSTRUCTION_BIAS: f64 = 0.8;

/// Builds a random initial timetable honoring per-course session counts,
/// biased toward each teacher's preferred slots.
///
/// Fails before the first draw when a catalog is empty; the random
/// selection would otherwise be undefined.
pub fn generate<R: Rng>(
    config: &TimetableConfig,
    rng: &mut R,
) -> Result<Solution, InvalidConfigurationError> {
    config.validate()?;

    let mut timetable = Vec::with_capacity(config.total_sessions());
    for course in &config.courses {
        let teacher = config.teacher_of(course);
        for _ in 0..config.sessions_for(course) {
            let slot = pick_slot(config, teacher, CONSTRUCTION_BIAS, rng);
            let room = pick_room(config, rng);
            timetable.push(Assignment {
                course: course.clone(),
                slot,
                room,
            });
        }
    }
    Ok(timetable)
}

/// Preference-biased slot draw shared by construction and mutation:
/// when the teacher has a non-empty preference list, draw from it with
/// probability `bias`, otherwise from the full catalog.
pub(crate) fn pick_slot<R: Rng>(
    config: &TimetableConfig,
    teacher: Option<&str>,
    bias: f64,
    rng: &mut R,
) -> String {
    if let Some(prefs) = teacher.and_then(|t| config.preferences_for(t)) {
        if !prefs.is_empty() && rng.random_bool(bias) {
            return prefs[rng.random_range(0..prefs.len())].clone();
        }
    }
    config.slots[rng.random_range(0..config.slots.len())].clone()
}

/// Uniform room draw, independent of the slot choice.
pub(crate) fn pick_room<R: Rng>(config: &TimetableConfig, rng: &mut R) -> String {
    config.rooms[rng.random_range(0..config.rooms.len())].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_SESSIONS;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> TimetableConfig {
        TimetableConfig::new()
            .with_courses(["A", "B", "C"])
            .with_teacher("A", "Khan")
            .with_teacher("B", "Ali")
            .with_rooms(["R1", "R2"])
            .with_slots(["Mon 09:00-10:00", "Tue 09:00-10:00", "Wed 09:00-10:00"])
            .with_requirement("B", 3)
    }

    #[test]
    fn test_cardinality() {
        let config = config();
        let mut rng = StdRng::seed_from_u64(1);
        let solution = generate(&config, &mut rng).unwrap();

        // A and C default to 2 sessions, B requires 3.
        assert_eq!(solution.len(), 2 * DEFAULT_SESSIONS as usize + 3);
        assert_eq!(solution.iter().filter(|a| a.course == "B").count(), 3);
    }

    #[test]
    fn test_draws_stay_in_catalog() {
        let config = config();
        let mut rng = StdRng::seed_from_u64(2);
        let solution = generate(&config, &mut rng).unwrap();

        for a in &solution {
            assert!(config.slots.contains(&a.slot));
            assert!(config.rooms.contains(&a.room));
        }
    }

    #[test]
    fn test_empty_catalog_fails_fast() {
        let mut rng = StdRng::seed_from_u64(3);

        let no_rooms = config().with_rooms(Vec::<String>::new());
        assert_eq!(
            generate(&no_rooms, &mut rng),
            Err(InvalidConfigurationError::EmptyRooms)
        );

        let no_slots = config().with_slots(Vec::<String>::new());
        assert_eq!(
            generate(&no_slots, &mut rng),
            Err(InvalidConfigurationError::EmptySlots)
        );
    }

    #[test]
    fn test_preference_bias() {
        let config = config()
            .with_preference("Khan", ["Mon 09:00-10:00"])
            .with_requirement("A", 500);
        let mut rng = StdRng::seed_from_u64(4);
        let solution = generate(&config, &mut rng).unwrap();

        let khan_hits = solution
            .iter()
            .filter(|a| a.course == "A" && a.slot == "Mon 09:00-10:00")
            .count();
        // Expected rate is 0.8 plus 1/3 of the remaining 0.2; with 500
        // draws anything below 350 would be far outside the bias.
        assert!(khan_hits > 350, "expected biased draws, got {khan_hits}/500");
    }

    #[test]
    fn test_same_seed_same_solution() {
        let config = config();
        let a = generate(&config, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate(&config, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn test_cardinality_matches_requirements(
            counts in proptest::collection::vec(1u32..6, 1..8)
        ) {
            let names: Vec<String> = (0..counts.len()).map(|i| format!("C{i}")).collect();
            let mut config = TimetableConfig::new()
                .with_courses(names.clone())
                .with_rooms(["R1"])
                .with_slots(["Mon 09:00-10:00"]);
            for (name, &n) in names.iter().zip(&counts) {
                config = config.with_requirement(name.as_str(), n);
            }

            let mut rng = StdRng::seed_from_u64(0);
            let solution = generate(&config, &mut rng).unwrap();
            prop_assert_eq!(
                solution.len(),
                counts.iter().map(|&n| n as usize).sum::<usize>()
            );
        }
    }
}
