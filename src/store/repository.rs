//! Store trait definitions.
//!
//! The schedule state is mutated exclusively through these traits. The split
//! mirrors the two concerns: [`ScheduleCommands`] for the live day
//! (placements, pool, activities) and [`SnapshotStore`] for frozen copies
//! (templates and date-keyed day schedules).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{ActivityId, CourtId, PersonId, ProgramId, TemplateId};
use crate::models::activity::Activity;
use crate::models::court::Court;
use crate::models::person::{Person, PlacementStatus};
use crate::models::program::Program;
use crate::models::snapshot::ScheduleTemplate;
use crate::store::error::StoreResult;

/// Commands and reads over the live day's schedule.
#[async_trait]
pub trait ScheduleCommands: Send + Sync {
    /// Currently selected calendar day.
    async fn selected_date(&self) -> StoreResult<NaiveDate>;

    /// Monotonic revision counter, bumped by every mutation. The view layer
    /// keys its memoization on this.
    async fn revision(&self) -> StoreResult<u64>;

    async fn courts(&self) -> StoreResult<Vec<Court>>;

    /// A single court, or `NotFound`.
    async fn court(&self, court_id: &CourtId) -> StoreResult<Court>;

    async fn programs(&self) -> StoreResult<Vec<Program>>;

    async fn program(&self, program_id: &ProgramId) -> StoreResult<Option<Program>>;

    /// The general pool of people not yet placed.
    async fn available_people(&self) -> StoreResult<Vec<Person>>;

    /// Insert a person into the available pool, replacing any existing
    /// record with the same id. This is how a committed roster import lands.
    async fn upsert_person(&self, person: Person) -> StoreResult<()>;

    /// Remove a person from the pool and from every placement.
    async fn remove_person(&self, person_id: &PersonId) -> StoreResult<bool>;

    /// Remove a person from the available pool, returning the record when it
    /// was present.
    async fn take_from_pool(&self, person_id: &PersonId) -> StoreResult<Option<Person>>;

    /// Put a person (back) into the available pool.
    async fn return_to_pool(&self, person: Person) -> StoreResult<()>;

    /// Insert a stamped placement into a court's occupant list. An existing
    /// entry for the same (person, start slot) pair on that court is
    /// replaced, preserving the one-entry-per-pair invariant.
    async fn place_occupant(&self, court_id: &CourtId, occupant: Person) -> StoreResult<()>;

    /// Remove a person's placement on one court. With a slot, removal is
    /// scoped to that exact (court, slot) pair; without one, every entry of
    /// the person on that court goes.
    async fn remove_placement(
        &self,
        court_id: &CourtId,
        person_id: &PersonId,
        time_slot: Option<&str>,
    ) -> StoreResult<bool>;

    /// Remove every placement of a person across all courts and slots.
    async fn remove_placements_everywhere(&self, person_id: &PersonId) -> StoreResult<usize>;

    /// All current placements of a person as (court, start slot) pairs.
    async fn find_placements(
        &self,
        person_id: &PersonId,
    ) -> StoreResult<Vec<(CourtId, Option<String>)>>;

    /// Transition a placement's status. Only the transitions of the
    /// placement state machine are accepted.
    async fn set_placement_status(
        &self,
        court_id: &CourtId,
        person_id: &PersonId,
        time_slot: Option<&str>,
        status: PlacementStatus,
    ) -> StoreResult<()>;

    async fn place_activity(&self, court_id: &CourtId, activity: Activity) -> StoreResult<()>;

    async fn remove_activity(
        &self,
        court_id: &CourtId,
        activity_id: &ActivityId,
    ) -> StoreResult<bool>;
}

/// Frozen copies of the court list: named templates and day snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Freeze the current courts under a name.
    async fn save_template(&self, name: &str) -> StoreResult<ScheduleTemplate>;

    async fn list_templates(&self) -> StoreResult<Vec<ScheduleTemplate>>;

    /// Replace the current courts with a template's frozen copy.
    async fn apply_template(&self, id: &TemplateId) -> StoreResult<()>;

    async fn delete_template(&self, id: &TemplateId) -> StoreResult<bool>;

    /// Freeze the current courts under the selected date, replacing any
    /// earlier snapshot for that day. Returns `false` when the current state
    /// is identical to the stored snapshot and nothing was written.
    async fn save_day(&self) -> StoreResult<bool>;

    /// Select another calendar day, swapping in that day's snapshot (or
    /// empty courts when none was saved). Unsaved changes to the current day
    /// are discarded.
    async fn switch_day(&self, date: NaiveDate) -> StoreResult<()>;

    async fn saved_days(&self) -> StoreResult<Vec<NaiveDate>>;
}

/// The full store surface the services operate on.
pub trait FullStore: ScheduleCommands + SnapshotStore {}

impl<T: ScheduleCommands + SnapshotStore> FullStore for T {}
