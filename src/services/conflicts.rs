//! Coach double-booking detection.
//!
//! Conflicts are advisory, not preventive: a coach may be double-booked, the
//! system flags it, and the decision to proceed rests with the user. An
//! accepted double-booking is recorded as a `Conflict` status on the
//! placement for later audit and filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::{CourtId, PersonId};
use crate::models::court::Court;
use crate::models::person::Person;
use crate::models::time_grid::TimeGrid;

/// court id -> time slot -> coaches double-booked at that slot.
pub type ConflictMap = HashMap<CourtId, HashMap<String, Vec<PersonId>>>;

/// A single detected double-booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub coach_id: PersonId,
    pub coach_name: String,
    pub court_id: CourtId,
    pub time_slot: String,
    /// The other courts whose coverage of the same coach overlaps the slot.
    pub other_courts: Vec<CourtId>,
}

/// Conflict report for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    pub date: NaiveDate,
    pub total_courts: usize,
    pub conflicted_courts: usize,
    pub records: Vec<ConflictRecord>,
}

fn placement_covers(grid: &TimeGrid, occupant: &Person, slot: &str) -> bool {
    match occupant.time_slot.as_deref() {
        Some(start) => grid.covers(start, occupant.end_time_slot.as_deref(), slot),
        None => false,
    }
}

fn covered_elsewhere(
    courts: &[Court],
    grid: &TimeGrid,
    coach_id: &PersonId,
    except: &CourtId,
    slot: &str,
) -> Vec<CourtId> {
    courts
        .iter()
        .filter(|c| &c.id != except)
        .filter(|c| {
            c.occupants
                .iter()
                .any(|o| &o.id == coach_id && placement_covers(grid, o, slot))
        })
        .map(|c| c.id.clone())
        .collect()
}

/// Detect coach double-bookings over every (court, time slot) pair.
///
/// A coach appears in the map entry of *each* court involved, so an overlap
/// between courts A and B reports on both.
pub fn coach_conflicts(courts: &[Court], grid: &TimeGrid) -> ConflictMap {
    let mut map = ConflictMap::new();

    for court in courts {
        for slot in grid.labels() {
            let mut coach_ids: Vec<PersonId> = Vec::new();
            for occupant in court.occupants.iter().filter(|o| o.is_coach()) {
                if !placement_covers(grid, occupant, slot) {
                    continue;
                }
                if coach_ids.contains(&occupant.id) {
                    continue;
                }
                if !covered_elsewhere(courts, grid, &occupant.id, &court.id, slot).is_empty() {
                    coach_ids.push(occupant.id.clone());
                }
            }
            if !coach_ids.is_empty() {
                map.entry(court.id.clone())
                    .or_default()
                    .insert(slot.clone(), coach_ids);
            }
        }
    }

    map
}

/// Drop-time single-candidate check.
///
/// Returns the other courts where `coach_id`'s coverage overlaps `slot`,
/// used synchronously to drive the override-confirmation flow. An empty
/// result means the drop is clean.
pub fn validate_coach_assignment(
    courts: &[Court],
    grid: &TimeGrid,
    coach_id: &PersonId,
    target_court: &CourtId,
    slot: &str,
) -> Vec<CourtId> {
    covered_elsewhere(courts, grid, coach_id, target_court, slot)
}

/// Aggregate report over the current courts.
pub fn build_conflict_report(courts: &[Court], grid: &TimeGrid, date: NaiveDate) -> ConflictReport {
    let map = coach_conflicts(courts, grid);

    let mut records = Vec::new();
    for court in courts {
        let Some(slots) = map.get(&court.id) else {
            continue;
        };
        let mut sorted_slots: Vec<&String> = slots.keys().collect();
        sorted_slots.sort();
        for slot in sorted_slots {
            for coach_id in &slots[slot] {
                let coach_name = court
                    .occupants
                    .iter()
                    .find(|o| &o.id == coach_id)
                    .map(|o| o.name.clone())
                    .unwrap_or_default();
                records.push(ConflictRecord {
                    coach_id: coach_id.clone(),
                    coach_name,
                    court_id: court.id.clone(),
                    time_slot: slot.clone(),
                    other_courts: covered_elsewhere(courts, grid, coach_id, &court.id, slot),
                });
            }
        }
    }

    ConflictReport {
        date,
        total_courts: courts.len(),
        conflicted_courts: map.len(),
        records,
    }
}
