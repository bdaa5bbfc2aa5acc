//! Players and coaches, including their placement fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{CourtId, PersonId, ProgramId};
use crate::models::program::Sport;

/// Whether the person is a player or a coach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Player,
    Coach,
}

/// Status tag on a placement. Affects visual treatment only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStatus {
    Pending,
    Confirmed,
    Conflict,
}

impl PlacementStatus {
    /// Allowed transitions: a pending placement may be confirmed or marked
    /// as an accepted conflict. Confirmed and conflict placements only leave
    /// the schedule through removal.
    pub fn can_transition_to(self, next: PlacementStatus) -> bool {
        matches!(
            (self, next),
            (PlacementStatus::Pending, PlacementStatus::Confirmed)
                | (PlacementStatus::Pending, PlacementStatus::Conflict)
        )
    }
}

/// Normalized 2-D position within a court's visual bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }
}

/// A player or coach.
///
/// The placement fields are present only while the person is assigned to a
/// court. A person appears at most once per (court, time-slot) pair but may
/// hold several placements across distinct slots of the day, one record per
/// placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub kind: PersonKind,

    // Placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_id: Option<CourtId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PlacementStatus>,

    // Scheduling attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_limit_hours: Option<f64>,
    #[serde(default)]
    pub hours_assigned: f64,
    #[serde(default)]
    pub completed_hours: f64,
    #[serde(default)]
    pub missed_hours: f64,
    #[serde(default)]
    pub extra_hours: f64,

    // Program association. `program_id` is the legacy single association;
    // `program_ids` is the current list. The primary program drives the
    // cached display color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<ProgramId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub program_ids: Vec<ProgramId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    // Sport restriction. An empty list means bookable for any sport.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sports: Vec<Sport>,

    // Availability (coaches).
    #[serde(default = "default_present")]
    pub present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_reason: Option<String>,

    // Contact data from roster import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_present() -> bool {
    true
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>, kind: PersonKind) -> Self {
        Person {
            id,
            name: name.into(),
            kind,
            court_id: None,
            time_slot: None,
            end_time_slot: None,
            position: None,
            assigned_date: None,
            status: None,
            duration_hours: None,
            daily_limit_hours: None,
            hours_assigned: 0.0,
            completed_hours: 0.0,
            missed_hours: 0.0,
            extra_hours: 0.0,
            program_id: None,
            program_ids: Vec::new(),
            color: None,
            sports: Vec::new(),
            present: true,
            absence_reason: None,
            email: None,
            phone: None,
            notes: None,
        }
    }

    pub fn is_player(&self) -> bool {
        self.kind == PersonKind::Player
    }

    pub fn is_coach(&self) -> bool {
        self.kind == PersonKind::Coach
    }

    pub fn is_placed(&self) -> bool {
        self.court_id.is_some()
    }

    /// Primary program: the legacy single association wins, then the head of
    /// the current list.
    pub fn primary_program(&self) -> Option<&ProgramId> {
        self.program_id.as_ref().or_else(|| self.program_ids.first())
    }

    /// Strip all placement fields, returning the person to pool shape.
    pub fn clear_placement(&mut self) {
        self.court_id = None;
        self.time_slot = None;
        self.end_time_slot = None;
        self.position = None;
        self.assigned_date = None;
        self.status = None;
    }
}
