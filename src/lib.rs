//! Simulated-annealing timetable engine.
//!
//! Assigns teaching sessions (course × required session count) to
//! (slot, room) pairs, minimizing a weighted penalty over hard conflicts
//! (double-booked teacher or room), soft preferences (a teacher's
//! preferred slots), and workload shape (sessions per day, back-to-back
//! versus gapped sessions). All constraints are soft: the search routes
//! around violations through the cost signal instead of rejecting
//! candidates, and returns the best timetable seen even when zero cost
//! is out of reach.
//!
//! # Architecture
//!
//! - [`model`]: the immutable configuration snapshot and the solution
//!   representation.
//! - [`slots`]: slot-label parsing with memoization.
//! - [`cost`]: the weight table and the penalty evaluator.
//! - [`moves`]: randomized construction and neighborhood mutation.
//! - [`sa`]: the annealing loop — mutate, evaluate, accept/reject, cool.
//! - [`analysis`]: summary statistics over a finished timetable.
//!
//! The crate defines no file format, CLI, or rendering surface; it takes
//! a configuration snapshot in and hands a result snapshot out. Front
//! ends, loaders, and report/chart renderers are external consumers.
//!
//! # Examples
//!
//! ```
//! use timegrid::cost::Weights;
//! use timegrid::model::TimetableConfig;
//! use timegrid::sa::{SaConfig, SaRunner};
//!
//! let config = TimetableConfig::new()
//!     .with_courses(["Algorithms", "Databases"])
//!     .with_teacher("Algorithms", "Khan")
//!     .with_teacher("Databases", "Ali")
//!     .with_rooms(["R1", "R2"])
//!     .with_slots(["Mon 09:00-11:00", "Tue 09:00-11:00"])
//!     .with_preference("Khan", ["Mon 09:00-11:00"]);
//!
//! let sa = SaConfig::default().with_max_iterations(10_000).with_seed(42);
//! let result = SaRunner::run(&config, &Weights::default(), &sa)?;
//!
//! assert_eq!(result.best.len(), config.total_sessions());
//! # Ok::<(), timegrid::model::InvalidConfigurationError>(())
//! ```

pub mod analysis;
pub mod cost;
pub mod model;
pub mod moves;
pub mod sa;
pub mod slots;
