//! Sport filtering and the conflict-only view.

use crate::models::court::Court;
use crate::models::person::Person;
use crate::models::program::SportFilter;
use crate::services::conflicts::ConflictMap;

/// Courts matching the selected sport. The `tennis` umbrella value matches
/// both the clay and hard sub-types.
pub fn filter_courts(courts: &[Court], filter: SportFilter) -> Vec<Court> {
    courts
        .iter()
        .filter(|c| filter.matches(c.sport))
        .cloned()
        .collect()
}

/// People bookable for the selected sport.
///
/// A person with no declared sport restriction passes every filter: absence
/// of restriction is permissive, not exclusive.
pub fn filter_people(people: &[Person], filter: SportFilter) -> Vec<Person> {
    people
        .iter()
        .filter(|p| p.sports.is_empty() || p.sports.iter().any(|&s| filter.matches(s)))
        .cloned()
        .collect()
}

/// Courts with at least one non-empty conflict slot entry.
pub fn conflict_courts(courts: &[Court], conflicts: &ConflictMap) -> Vec<Court> {
    courts
        .iter()
        .filter(|c| {
            conflicts
                .get(&c.id)
                .is_some_and(|slots| slots.values().any(|ids| !ids.is_empty()))
        })
        .cloned()
        .collect()
}
