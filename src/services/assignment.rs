//! The court assignment operation.
//!
//! Assignment places a person onto a court at an optional time slot: it
//! resolves the effective duration, derives the span's end slot, stamps the
//! placement (date, duration, color), removes any prior placement of the
//! person, inserts the new one, and handles the available-people pool.
//!
//! An unknown target court or a slot label outside the day grid is an
//! explicit error; advisory checks (conflicts, budgets) live elsewhere and
//! never block here.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{CourtId, PersonId};
use crate::config::EngineConfig;
use crate::models::person::{Person, PlacementStatus, Position};
use crate::models::time_grid::TimeGrid;
use crate::services::notify::{NoticeLevel, Notifier};
use crate::store::error::{ErrorContext, StoreError, StoreResult};
use crate::store::repository::FullStore;

/// A drop or button-driven assignment.
#[derive(Debug, Clone)]
pub struct AssignmentRequest {
    pub court_id: CourtId,
    pub person: Person,
    /// Start slot label; `None` places the person in the layout-only view.
    pub time_slot: Option<String>,
    /// Normalized drop position; a scattered point is generated when absent.
    pub position: Option<Position>,
    /// Initial status. Defaults to `Confirmed`; an intercepting limit or
    /// conflict check may create the placement as `Pending` or `Conflict`.
    pub status: Option<PlacementStatus>,
}

impl AssignmentRequest {
    pub fn new(court_id: CourtId, person: Person) -> Self {
        AssignmentRequest {
            court_id,
            person,
            time_slot: None,
            position: None,
            status: None,
        }
    }

    pub fn at_slot(mut self, slot: impl Into<String>) -> Self {
        self.time_slot = Some(slot.into());
        self
    }

    pub fn at_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_status(mut self, status: PlacementStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Whether the person was newly assigned or moved from a prior placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentOutcome {
    Assigned,
    Moved,
}

/// What the assignment resolved to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub outcome: AssignmentOutcome,
    pub person_id: PersonId,
    pub court_id: CourtId,
    pub time_slot: Option<String>,
    pub end_time_slot: Option<String>,
    pub duration_hours: f64,
}

/// Assignment operations over a store.
pub struct AssignmentService {
    store: Arc<dyn FullStore>,
    config: EngineConfig,
    grid: TimeGrid,
    notifier: Arc<dyn Notifier>,
}

impl AssignmentService {
    pub fn new(
        store: Arc<dyn FullStore>,
        config: EngineConfig,
        notifier: Arc<dyn Notifier>,
    ) -> StoreResult<Self> {
        let grid = config.time_grid()?;
        Ok(AssignmentService {
            store,
            config,
            grid,
            notifier,
        })
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Place a person onto a court, moving them from any prior placement.
    pub async fn assign(&self, request: AssignmentRequest) -> StoreResult<AssignmentResult> {
        let AssignmentRequest {
            court_id,
            mut person,
            time_slot,
            position,
            status,
        } = request;

        if person.id.as_str().is_empty() {
            return Err(StoreError::validation_with_context(
                "Person id must not be empty",
                ErrorContext::new("assign").with_entity("person"),
            ));
        }

        // Target validation: unknown court and unknown slot are explicit
        // error paths, not silent no-ops.
        let target = self.store.court(&court_id).await?;
        if let Some(slot) = time_slot.as_deref() {
            if !self.grid.contains(slot) {
                return Err(StoreError::validation_with_context(
                    format!("Time slot '{}' is not in the day grid", slot),
                    ErrorContext::new("assign")
                        .with_entity("time_slot")
                        .with_entity_id(slot),
                ));
            }
        }

        let duration = self.effective_duration(&person);
        let end_time_slot = time_slot
            .as_deref()
            .and_then(|slot| self.grid.span_end(slot, duration));

        // The dragged record carries its own prior placement. A record drawn
        // from the pool carries none, so a coach's other bookings survive a
        // new drop (double-booking is the conflict detector's business, not
        // a removal side effect).
        let had_placement = person.court_id.is_some();
        match (person.court_id.clone(), person.time_slot.clone()) {
            // Scoped to the exact (court, slot) pair.
            (Some(prior_court), Some(prior_slot)) => {
                self.store
                    .remove_placement(&prior_court, &person.id, Some(&prior_slot))
                    .await?;
            }
            // Layout-only placement: scan every court and slot.
            (Some(_), None) => {
                self.store.remove_placements_everywhere(&person.id).await?;
            }
            (None, _) => {}
        }

        // Players drawn from the general pool leave it; coaches stay
        // available for further bookings and answer to the conflict
        // detector instead.
        if !had_placement && person.is_player() {
            self.store.take_from_pool(&person.id).await?;
        }

        person.court_id = Some(court_id.clone());
        person.time_slot = time_slot.clone();
        person.end_time_slot = end_time_slot.clone();
        person.position = Some(position.unwrap_or_else(scattered_position));
        person.assigned_date = Some(self.store.selected_date().await?);
        person.duration_hours = Some(duration);
        person.color = Some(self.resolve_color(&person).await?);
        person.status = Some(status.unwrap_or(PlacementStatus::Confirmed));

        let person_id = person.id.clone();
        let person_name = person.name.clone();
        self.store.place_occupant(&court_id, person).await?;

        let outcome = if had_placement {
            AssignmentOutcome::Moved
        } else {
            AssignmentOutcome::Assigned
        };
        let verb = match outcome {
            AssignmentOutcome::Assigned => "assigned to",
            AssignmentOutcome::Moved => "moved to",
        };
        let message = match time_slot.as_deref() {
            Some(slot) => format!("{} {} {} at {}", person_name, verb, target.name, slot),
            None => format!("{} {} {}", person_name, verb, target.name),
        };
        self.notifier.notify(NoticeLevel::Success, &message);

        Ok(AssignmentResult {
            outcome,
            person_id,
            court_id,
            time_slot,
            end_time_slot,
            duration_hours: duration,
        })
    }

    /// Remove a placement entirely, returning the person to the pool.
    pub async fn remove(
        &self,
        court_id: &CourtId,
        person_id: &PersonId,
        time_slot: Option<&str>,
    ) -> StoreResult<bool> {
        let court = self.store.court(court_id).await?;
        let occupant = court.occupant_at(person_id, time_slot).cloned();

        let removed = self
            .store
            .remove_placement(court_id, person_id, time_slot)
            .await?;
        if !removed {
            return Ok(false);
        }

        if let Some(mut person) = occupant {
            // Back to the pool only when no other placement remains.
            if self.store.find_placements(person_id).await?.is_empty() {
                person.clear_placement();
                self.store.return_to_pool(person).await?;
            }
        }

        self.notifier
            .notify(NoticeLevel::Info, &format!("Removed from {}", court.name));
        Ok(true)
    }

    fn effective_duration(&self, person: &Person) -> f64 {
        person
            .duration_hours
            .unwrap_or_else(|| self.config.session_hours_for(person.primary_program()))
    }

    async fn resolve_color(&self, person: &Person) -> StoreResult<String> {
        if let Some(program_id) = person.primary_program() {
            if let Some(program) = self.store.program(program_id).await? {
                return Ok(program.color);
            }
        }
        Ok(self.config.default_color_for(person.kind).to_string())
    }
}

fn scattered_position() -> Position {
    let mut rng = rand::thread_rng();
    Position::new(rng.gen_range(0.1..0.9), rng.gen_range(0.1..0.9))
}
