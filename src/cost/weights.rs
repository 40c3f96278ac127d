//! Penalty weight table.

/// Named penalty weights for the cost model.
///
/// Hard violations (double bookings, missing teacher, malformed slot)
/// carry weights orders of magnitude above the workload-shape terms, so
/// the search eliminates them first but is never forced to reject a
/// candidate outright. Callers may override any subset.
///
/// # Examples
///
/// ```
/// use timegrid::cost::Weights;
///
/// let weights = Weights::default().with_not_preferred(5).with_gap(0);
/// assert_eq!(weights.not_preferred, 5);
/// assert_eq!(weights.teacher_slot_conflict, 20_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    /// Same teacher booked twice into one slot.
    pub teacher_slot_conflict: u64,

    /// Same room booked twice into one slot.
    pub room_slot_conflict: u64,

    /// Course with no (or empty) teacher mapping.
    pub missing_teacher: u64,

    /// Assignment using a slot label that fails parsing.
    pub malformed_slot: u64,

    /// Slot outside the teacher's non-empty preference list.
    pub not_preferred: u64,

    /// Consecutive same-day sessions at most an hour apart.
    pub back_to_back: u64,

    /// Consecutive same-day sessions more than an hour apart.
    pub gap: u64,

    /// Per extra session beyond four for one teacher on one day.
    pub too_many_sessions_day: u64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            teacher_slot_conflict: 20_000,
            room_slot_conflict: 20_000,
            missing_teacher: 20_000,
            malformed_slot: 20_000,
            not_preferred: 2,
            back_to_back: 1,
            gap: 1,
            too_many_sessions_day: 10,
        }
    }
}

impl Weights {
    pub fn with_teacher_slot_conflict(mut self, w: u64) -> Self {
        self.teacher_slot_conflict = w;
        self
    }

    pub fn with_room_slot_conflict(mut self, w: u64) -> Self {
        self.room_slot_conflict = w;
        self
    }

    pub fn with_missing_teacher(mut self, w: u64) -> Self {
        self.missing_teacher = w;
        self
    }

    pub fn with_malformed_slot(mut self, w: u64) -> Self {
        self.malformed_slot = w;
        self
    }

    pub fn with_not_preferred(mut self, w: u64) -> Self {
        self.not_preferred = w;
        self
    }

    pub fn with_back_to_back(mut self, w: u64) -> Self {
        self.back_to_back = w;
        self
    }

    pub fn with_gap(mut self, w: u64) -> Self {
        self.gap = w;
        self
    }

    pub fn with_too_many_sessions_day(mut self, w: u64) -> Self {
        self.too_many_sessions_day = w;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = Weights::default();
        assert_eq!(w.teacher_slot_conflict, 20_000);
        assert_eq!(w.room_slot_conflict, 20_000);
        assert_eq!(w.missing_teacher, 20_000);
        assert_eq!(w.malformed_slot, 20_000);
        assert_eq!(w.not_preferred, 2);
        assert_eq!(w.back_to_back, 1);
        assert_eq!(w.gap, 1);
        assert_eq!(w.too_many_sessions_day, 10);
    }

    #[test]
    fn test_partial_override() {
        let w = Weights::default()
            .with_back_to_back(7)
            .with_too_many_sessions_day(0);
        assert_eq!(w.back_to_back, 7);
        assert_eq!(w.too_many_sessions_day, 0);
        assert_eq!(w.gap, 1);
    }
}
