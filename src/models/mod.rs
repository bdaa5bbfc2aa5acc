//! Domain entities for the scheduling engine.
//!
//! - [`time_grid`]: the ordered day sequence of slot labels and span arithmetic
//! - [`person`]: players and coaches, including their placement fields
//! - [`court`]: courts with independent occupant and activity collections
//! - [`activity`]: non-person schedulable items (drills, matches, ...)
//! - [`program`]: training programs, sports, and the sport filter
//! - [`snapshot`]: named templates and date-keyed day snapshots

pub mod activity;
pub mod court;
pub mod person;
pub mod program;
pub mod snapshot;
pub mod time_grid;

pub use activity::Activity;
pub use court::Court;
pub use person::{Person, PersonKind, PlacementStatus, Position};
pub use program::{Program, Sport, SportFilter};
pub use snapshot::{DateSchedule, ScheduleTemplate};
pub use time_grid::TimeGrid;
