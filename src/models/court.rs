//! Courts and their occupant/activity collections.

use serde::{Deserialize, Serialize};

use crate::api::{CourtId, PersonId};
use crate::models::activity::Activity;
use crate::models::person::Person;
use crate::models::program::Sport;

/// A court (or pool lane, fitness room) with its current placements.
///
/// Occupants and activities are independent collections; both may coexist at
/// the same time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub sport: Sport,
    pub name: String,
    pub number: u32,
    #[serde(default)]
    pub occupants: Vec<Person>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Court {
    pub fn new(id: CourtId, sport: Sport, name: impl Into<String>, number: u32) -> Self {
        Court {
            id,
            sport,
            name: name.into(),
            number,
            occupants: Vec::new(),
            activities: Vec::new(),
        }
    }

    /// The person's occupant entry at an exact start slot, if any.
    pub fn occupant_at(&self, person_id: &PersonId, time_slot: Option<&str>) -> Option<&Person> {
        self.occupants
            .iter()
            .find(|o| &o.id == person_id && o.time_slot.as_deref() == time_slot)
    }

    pub fn has_occupant(&self, person_id: &PersonId) -> bool {
        self.occupants.iter().any(|o| &o.id == person_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::person::PersonKind;

    #[test]
    fn test_occupant_at_matches_exact_slot() {
        let mut court = Court::new(CourtId::new("c1"), Sport::Padel, "Padel 1", 1);
        let mut person = Person::new(PersonId::new("p1"), "Anna", PersonKind::Player);
        person.time_slot = Some("10:00".to_string());
        court.occupants.push(person);

        assert!(court.occupant_at(&PersonId::new("p1"), Some("10:00")).is_some());
        assert!(court.occupant_at(&PersonId::new("p1"), Some("10:30")).is_none());
        assert!(court.occupant_at(&PersonId::new("p1"), None).is_none());
        assert!(court.has_occupant(&PersonId::new("p1")));
    }
}
