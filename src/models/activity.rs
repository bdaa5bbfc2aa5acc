//! Non-person schedulable items.

use serde::{Deserialize, Serialize};

use crate::api::{ActivityId, CourtId};
use crate::models::time_grid::TimeGrid;

/// A drill, match, or other scheduled activity.
///
/// Activities live on a court's activity list, independent of the occupant
/// list; both may coexist at the same time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub category: String,
    pub duration_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_id: Option<CourtId>,
}

impl Activity {
    pub fn new(
        id: ActivityId,
        name: impl Into<String>,
        category: impl Into<String>,
        duration_hours: f64,
    ) -> Self {
        Activity {
            id,
            name: name.into(),
            category: category.into(),
            duration_hours,
            time_slot: None,
            end_time_slot: None,
            court_id: None,
        }
    }

    /// Schedule the activity at a start slot, deriving the end slot from its
    /// duration under the same span arithmetic as person placements.
    pub fn scheduled_at(mut self, slot: impl Into<String>, grid: &TimeGrid) -> Self {
        let slot = slot.into();
        self.end_time_slot = grid.span_end(&slot, self.duration_hours);
        self.time_slot = Some(slot);
        self
    }
}
