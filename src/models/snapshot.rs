//! Frozen copies of the court list: named templates and day snapshots.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::TemplateId;
use crate::models::court::Court;

/// A named frozen copy of the full court list, used to save/restore/copy a
/// day's assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    pub id: TemplateId,
    pub name: String,
    pub courts: Vec<Court>,
    pub created_at: DateTime<Utc>,
    pub checksum: String,
}

/// A date-keyed frozen copy of the court list.
///
/// At most one snapshot per calendar day is retained; saving again replaces
/// the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSchedule {
    pub date: NaiveDate,
    pub courts: Vec<Court>,
    pub saved_at: DateTime<Utc>,
    pub checksum: String,
}
