//! Timetable configuration snapshot.

use std::collections::HashMap;
use std::fmt;

/// Sessions scheduled for a course when `requirements` has no entry for it.
pub const DEFAULT_SESSIONS: u32 = 2;

/// Immutable input catalog for one optimization run.
///
/// Supplied by an external collaborator (front-end, loader); the engine
/// never mutates it. Courses are kept in a `Vec` so iteration order is
/// deterministic and runs are reproducible under a fixed seed.
///
/// # Examples
///
/// ```
/// use timegrid::model::TimetableConfig;
///
/// let config = TimetableConfig::new()
///     .with_courses(["Algorithms", "Databases"])
///     .with_teacher("Algorithms", "Khan")
///     .with_teacher("Databases", "Ali")
///     .with_rooms(["R1", "R2"])
///     .with_slots(["Mon 09:00-11:00", "Tue 09:00-11:00"])
///     .with_preference("Khan", ["Mon 09:00-11:00"]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimetableConfig {
    /// Course identifiers, in deterministic iteration order.
    pub courses: Vec<String>,

    /// Course → teacher. An empty string or a missing entry means the
    /// course has no teacher assigned (penalized, never an error).
    pub faculty: HashMap<String, String>,

    /// Room catalog. Must be non-empty to run.
    pub rooms: Vec<String>,

    /// Slot catalog, labels of the form `"<Day> <HH:MM>-<HH:MM>"`.
    /// Must be non-empty to run. Malformed labels are allowed here;
    /// they are charged by the cost model when a solution uses them.
    pub slots: Vec<String>,

    /// Teacher → preferred slot labels. May be absent or empty per teacher.
    pub preferred_slots: HashMap<String, Vec<String>>,

    /// Course → required session count. Missing entries default to
    /// [`DEFAULT_SESSIONS`].
    pub requirements: HashMap<String, u32>,
}

impl TimetableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = courses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_teacher(mut self, course: impl Into<String>, teacher: impl Into<String>) -> Self {
        self.faculty.insert(course.into(), teacher.into());
        self
    }

    pub fn with_rooms<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rooms = rooms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots = slots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preference<I, S>(mut self, teacher: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_slots
            .insert(teacher.into(), slots.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_requirement(mut self, course: impl Into<String>, sessions: u32) -> Self {
        self.requirements.insert(course.into(), sessions);
        self
    }

    /// The teacher of a course, or `None` when the course has no teacher
    /// mapping or the mapped name is empty.
    pub fn teacher_of(&self, course: &str) -> Option<&str> {
        self.faculty
            .get(course)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Required session count for a course, defaulting to [`DEFAULT_SESSIONS`].
    pub fn sessions_for(&self, course: &str) -> u32 {
        self.requirements
            .get(course)
            .copied()
            .unwrap_or(DEFAULT_SESSIONS)
    }

    /// Preference list for a teacher, if one was registered at all.
    pub fn preferences_for(&self, teacher: &str) -> Option<&[String]> {
        self.preferred_slots.get(teacher).map(Vec::as_slice)
    }

    /// Total number of assignments a generated solution will contain.
    pub fn total_sessions(&self) -> usize {
        self.courses
            .iter()
            .map(|c| self.sessions_for(c) as usize)
            .sum()
    }

    /// Checks the shape preconditions of the search.
    ///
    /// Empty catalogs make the random draws undefined, so they are
    /// rejected up front instead of being discovered mid-loop.
    pub fn validate(&self) -> Result<(), InvalidConfigurationError> {
        if self.courses.is_empty() {
            return Err(InvalidConfigurationError::EmptyCourses);
        }
        if self.rooms.is_empty() {
            return Err(InvalidConfigurationError::EmptyRooms);
        }
        if self.slots.is_empty() {
            return Err(InvalidConfigurationError::EmptySlots);
        }
        Ok(())
    }
}

/// A configuration whose shape makes the search itself undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidConfigurationError {
    /// No courses to schedule.
    EmptyCourses,

    /// No rooms to draw from.
    EmptyRooms,

    /// No slots to draw from.
    EmptySlots,
}

impl fmt::Display for InvalidConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCourses => write!(f, "course catalog is empty"),
            Self::EmptyRooms => write!(f, "room catalog is empty"),
            Self::EmptySlots => write!(f, "slot catalog is empty"),
        }
    }
}

impl std::error::Error for InvalidConfigurationError {}
