//! # courtplan
//!
//! Scheduling engine for a sports-academy console.
//!
//! This crate implements the court/time-slot assignment core of the console:
//! placing players, coaches, and activities onto courts, detecting coach
//! double-bookings, checking per-person hour budgets against program rules,
//! and deriving the filtered views the front end renders. Rendering, routing,
//! and visual componentry live elsewhere; the crate's boundary is in-process
//! calls from UI event handlers (or tests) into the service layer.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the public DTO surface
//! - [`config`]: Engine configuration (day window, program rules, defaults)
//! - [`models`]: Domain entities and the day time grid
//! - [`store`]: The schedule store trait and its in-memory implementation
//! - [`services`]: Assignment, conflict detection, hour budgets, deferred
//!   validation, and the notification sink
//! - [`views`]: Pure sport/conflict filtering and memoized derived views
//! - [`parsing`]: Roster spreadsheet import
//! - [`prefs`]: Best-effort mirroring of UI cursor state
//!
//! ## Validation policy
//!
//! Conflict and hour-budget checks are advisory: they flag a problematic
//! state and leave the decision to the user. An accepted double-booking is
//! recorded on the placement itself and surfaces in the conflict views.

pub mod api;
pub mod config;
pub mod models;
pub mod parsing;
pub mod prefs;
pub mod services;
pub mod store;
pub mod views;
