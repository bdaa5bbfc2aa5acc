//! Derived views over the schedule.
//!
//! Everything here is derivation, never mutation: pure filter functions over
//! cloned snapshots ([`filtering`]) and a memoized view bundle recomputed on
//! read when the store revision or the sport filter changed ([`derived`]).

pub mod derived;
pub mod filtering;

pub use derived::{DerivedViews, ScheduleView};
pub use filtering::{conflict_courts, filter_courts, filter_people};
