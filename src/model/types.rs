//! Solution representation.

/// One scheduled session: a course placed into a (slot, room) pair.
///
/// Assignments are plain value types. The engine never edits one in
/// place once it is part of a caller-visible solution; neighborhood
/// moves always work on a fresh copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Course identifier.
    pub course: String,

    /// Slot label, e.g. `"Mon 09:00-11:00"`.
    pub slot: String,

    /// Room identifier.
    pub room: String,
}

impl Assignment {
    pub fn new(
        course: impl Into<String>,
        slot: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            course: course.into(),
            slot: slot.into(),
            room: room.into(),
        }
    }
}

/// A full timetable candidate.
///
/// Order carries no scheduling meaning, but it is preserved so that two
/// runs with the same seed produce byte-identical output.
pub type Solution = Vec<Assignment>;
