//! In-memory schedule store.
//!
//! All schedule state for the session lives here, behind a single lock.
//! Courts, the people pool, and programs are seeded at construction and
//! mutated only through the command interface for the session's duration.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{ActivityId, CourtId, PersonId, ProgramId, TemplateId};
use crate::models::activity::Activity;
use crate::models::court::Court;
use crate::models::person::{Person, PlacementStatus};
use crate::models::program::Program;
use crate::models::snapshot::{DateSchedule, ScheduleTemplate};
use crate::store::checksum::calculate_checksum;
use crate::store::error::{ErrorContext, StoreError, StoreResult};
use crate::store::repository::{ScheduleCommands, SnapshotStore};

/// The single authoritative in-memory schedule state.
#[derive(Clone)]
pub struct LocalStore {
    data: Arc<RwLock<StoreData>>,
}

struct StoreData {
    selected_date: NaiveDate,
    courts: Vec<Court>,
    pool: Vec<Person>,
    programs: Vec<Program>,
    templates: Vec<ScheduleTemplate>,
    day_schedules: HashMap<NaiveDate, DateSchedule>,
    revision: u64,
}

impl StoreData {
    fn bump(&mut self) {
        self.revision += 1;
    }

    fn court_index(&self, court_id: &CourtId, operation: &str) -> StoreResult<usize> {
        self.courts
            .iter()
            .position(|c| &c.id == court_id)
            .ok_or_else(|| {
                StoreError::not_found_with_context(
                    format!("Court {} not found", court_id),
                    ErrorContext::new(operation)
                        .with_entity("court")
                        .with_entity_id(court_id),
                )
            })
    }

    fn courts_checksum(&self) -> StoreResult<String> {
        let json = serde_json::to_string(&self.courts)
            .map_err(|e| StoreError::internal(format!("Failed to serialize courts: {}", e)))?;
        Ok(calculate_checksum(&json))
    }
}

impl LocalStore {
    /// Create a store seeded with the session's courts, people pool, and
    /// programs, selecting `date` as the current day.
    pub fn new(
        date: NaiveDate,
        courts: Vec<Court>,
        pool: Vec<Person>,
        programs: Vec<Program>,
    ) -> Self {
        LocalStore {
            data: Arc::new(RwLock::new(StoreData {
                selected_date: date,
                courts,
                pool,
                programs,
                templates: Vec::new(),
                day_schedules: HashMap::new(),
                revision: 0,
            })),
        }
    }

    /// Number of saved day snapshots. Test/diagnostic helper.
    pub fn day_schedule_count(&self) -> usize {
        self.data.read().day_schedules.len()
    }
}

#[async_trait]
impl ScheduleCommands for LocalStore {
    async fn selected_date(&self) -> StoreResult<NaiveDate> {
        Ok(self.data.read().selected_date)
    }

    async fn revision(&self) -> StoreResult<u64> {
        Ok(self.data.read().revision)
    }

    async fn courts(&self) -> StoreResult<Vec<Court>> {
        Ok(self.data.read().courts.clone())
    }

    async fn court(&self, court_id: &CourtId) -> StoreResult<Court> {
        let data = self.data.read();
        let index = data.court_index(court_id, "court")?;
        Ok(data.courts[index].clone())
    }

    async fn programs(&self) -> StoreResult<Vec<Program>> {
        Ok(self.data.read().programs.clone())
    }

    async fn program(&self, program_id: &ProgramId) -> StoreResult<Option<Program>> {
        Ok(self
            .data
            .read()
            .programs
            .iter()
            .find(|p| &p.id == program_id)
            .cloned())
    }

    async fn available_people(&self) -> StoreResult<Vec<Person>> {
        Ok(self.data.read().pool.clone())
    }

    async fn upsert_person(&self, person: Person) -> StoreResult<()> {
        let mut data = self.data.write();
        match data.pool.iter().position(|p| p.id == person.id) {
            Some(index) => data.pool[index] = person,
            None => data.pool.push(person),
        }
        data.bump();
        Ok(())
    }

    async fn remove_person(&self, person_id: &PersonId) -> StoreResult<bool> {
        let mut data = self.data.write();
        let pool_before = data.pool.len();
        data.pool.retain(|p| &p.id != person_id);
        let mut removed = data.pool.len() < pool_before;
        for court in &mut data.courts {
            let before = court.occupants.len();
            court.occupants.retain(|o| &o.id != person_id);
            removed |= court.occupants.len() < before;
        }
        if removed {
            data.bump();
        }
        Ok(removed)
    }

    async fn take_from_pool(&self, person_id: &PersonId) -> StoreResult<Option<Person>> {
        let mut data = self.data.write();
        let taken = match data.pool.iter().position(|p| &p.id == person_id) {
            Some(index) => Some(data.pool.remove(index)),
            None => None,
        };
        if taken.is_some() {
            data.bump();
        }
        Ok(taken)
    }

    async fn return_to_pool(&self, person: Person) -> StoreResult<()> {
        let mut data = self.data.write();
        if data.pool.iter().any(|p| p.id == person.id) {
            return Ok(());
        }
        data.pool.push(person);
        data.bump();
        Ok(())
    }

    async fn place_occupant(&self, court_id: &CourtId, occupant: Person) -> StoreResult<()> {
        let mut data = self.data.write();
        let index = data.court_index(court_id, "place_occupant")?;
        let court = &mut data.courts[index];

        // One entry per (person, start slot) pair on a court.
        court
            .occupants
            .retain(|o| !(o.id == occupant.id && o.time_slot == occupant.time_slot));

        log::debug!(
            "Placing {} on court {} at {:?}",
            occupant.id,
            court_id,
            occupant.time_slot
        );
        court.occupants.push(occupant);
        data.bump();
        Ok(())
    }

    async fn remove_placement(
        &self,
        court_id: &CourtId,
        person_id: &PersonId,
        time_slot: Option<&str>,
    ) -> StoreResult<bool> {
        let mut data = self.data.write();
        let index = data.court_index(court_id, "remove_placement")?;
        let court = &mut data.courts[index];

        let before = court.occupants.len();
        match time_slot {
            Some(slot) => court
                .occupants
                .retain(|o| !(&o.id == person_id && o.time_slot.as_deref() == Some(slot))),
            None => court.occupants.retain(|o| &o.id != person_id),
        }
        let removed = court.occupants.len() < before;
        if removed {
            data.bump();
        }
        Ok(removed)
    }

    async fn remove_placements_everywhere(&self, person_id: &PersonId) -> StoreResult<usize> {
        let mut data = self.data.write();
        let mut removed = 0;
        for court in &mut data.courts {
            let before = court.occupants.len();
            court.occupants.retain(|o| &o.id != person_id);
            removed += before - court.occupants.len();
        }
        if removed > 0 {
            data.bump();
        }
        Ok(removed)
    }

    async fn find_placements(
        &self,
        person_id: &PersonId,
    ) -> StoreResult<Vec<(CourtId, Option<String>)>> {
        let data = self.data.read();
        let mut placements = Vec::new();
        for court in &data.courts {
            for occupant in court.occupants.iter().filter(|o| &o.id == person_id) {
                placements.push((court.id.clone(), occupant.time_slot.clone()));
            }
        }
        Ok(placements)
    }

    async fn set_placement_status(
        &self,
        court_id: &CourtId,
        person_id: &PersonId,
        time_slot: Option<&str>,
        status: PlacementStatus,
    ) -> StoreResult<()> {
        let mut data = self.data.write();
        let index = data.court_index(court_id, "set_placement_status")?;
        let occupant = data.courts[index]
            .occupants
            .iter_mut()
            .find(|o| &o.id == person_id && o.time_slot.as_deref() == time_slot)
            .ok_or_else(|| {
                StoreError::not_found_with_context(
                    format!("No placement of {} at {:?}", person_id, time_slot),
                    ErrorContext::new("set_placement_status")
                        .with_entity("person")
                        .with_entity_id(person_id),
                )
            })?;

        let current = occupant.status.unwrap_or(PlacementStatus::Pending);
        if current == status {
            return Ok(());
        }
        if !current.can_transition_to(status) {
            return Err(StoreError::validation_with_context(
                format!("Cannot move placement from {:?} to {:?}", current, status),
                ErrorContext::new("set_placement_status")
                    .with_entity("person")
                    .with_entity_id(person_id),
            ));
        }

        occupant.status = Some(status);
        data.bump();
        Ok(())
    }

    async fn place_activity(&self, court_id: &CourtId, mut activity: Activity) -> StoreResult<()> {
        let mut data = self.data.write();
        let index = data.court_index(court_id, "place_activity")?;
        activity.court_id = Some(court_id.clone());
        data.courts[index]
            .activities
            .retain(|a| a.id != activity.id);
        data.courts[index].activities.push(activity);
        data.bump();
        Ok(())
    }

    async fn remove_activity(
        &self,
        court_id: &CourtId,
        activity_id: &ActivityId,
    ) -> StoreResult<bool> {
        let mut data = self.data.write();
        let index = data.court_index(court_id, "remove_activity")?;
        let before = data.courts[index].activities.len();
        data.courts[index].activities.retain(|a| &a.id != activity_id);
        let removed = data.courts[index].activities.len() < before;
        if removed {
            data.bump();
        }
        Ok(removed)
    }
}

#[async_trait]
impl SnapshotStore for LocalStore {
    async fn save_template(&self, name: &str) -> StoreResult<ScheduleTemplate> {
        let mut data = self.data.write();
        let template = ScheduleTemplate {
            id: TemplateId::generate(),
            name: name.to_string(),
            courts: data.courts.clone(),
            created_at: Utc::now(),
            checksum: data.courts_checksum()?,
        };
        log::info!("Saved template '{}' ({})", name, template.id);
        data.templates.push(template.clone());
        data.bump();
        Ok(template)
    }

    async fn list_templates(&self) -> StoreResult<Vec<ScheduleTemplate>> {
        Ok(self.data.read().templates.clone())
    }

    async fn apply_template(&self, id: &TemplateId) -> StoreResult<()> {
        let mut data = self.data.write();
        let courts = data
            .templates
            .iter()
            .find(|t| &t.id == id)
            .map(|t| t.courts.clone())
            .ok_or_else(|| {
                StoreError::not_found_with_context(
                    format!("Template {} not found", id),
                    ErrorContext::new("apply_template")
                        .with_entity("template")
                        .with_entity_id(id),
                )
            })?;
        data.courts = courts;
        data.bump();
        Ok(())
    }

    async fn delete_template(&self, id: &TemplateId) -> StoreResult<bool> {
        let mut data = self.data.write();
        let before = data.templates.len();
        data.templates.retain(|t| &t.id != id);
        let removed = data.templates.len() < before;
        if removed {
            data.bump();
        }
        Ok(removed)
    }

    async fn save_day(&self) -> StoreResult<bool> {
        let mut data = self.data.write();
        let checksum = data.courts_checksum()?;
        let date = data.selected_date;

        if let Some(existing) = data.day_schedules.get(&date) {
            if existing.checksum == checksum {
                log::debug!("Day {} unchanged, snapshot kept", date);
                return Ok(false);
            }
        }

        let snapshot = DateSchedule {
            date,
            courts: data.courts.clone(),
            saved_at: Utc::now(),
            checksum,
        };
        data.day_schedules.insert(date, snapshot);
        data.bump();
        log::info!("Saved schedule for {}", date);
        Ok(true)
    }

    async fn switch_day(&self, date: NaiveDate) -> StoreResult<()> {
        let mut data = self.data.write();
        if data.selected_date == date {
            return Ok(());
        }

        // Unsaved changes to the current day are discarded here.
        let courts = match data.day_schedules.get(&date) {
            Some(snapshot) => snapshot.courts.clone(),
            None => data
                .courts
                .iter()
                .map(|c| Court::new(c.id.clone(), c.sport, c.name.clone(), c.number))
                .collect(),
        };
        data.courts = courts;
        log::info!("Switched selected day to {}", date);
        data.selected_date = date;
        data.bump();
        Ok(())
    }

    async fn saved_days(&self) -> StoreResult<Vec<NaiveDate>> {
        let mut days: Vec<NaiveDate> = self.data.read().day_schedules.keys().copied().collect();
        days.sort();
        Ok(days)
    }
}
