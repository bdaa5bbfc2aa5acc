//! Pull-based derived views.
//!
//! The front end renders from a [`ScheduleView`] bundle derived from the
//! store. Derivation is memoized on (store revision, sport filter): reading
//! with an unchanged revision and filter returns the cached bundle, any
//! mutation invalidates it on the next read. This replaces the original
//! console's reactive re-render with an explicit recompute-on-read.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::court::Court;
use crate::models::person::Person;
use crate::models::program::SportFilter;
use crate::models::time_grid::TimeGrid;
use crate::services::conflicts::{coach_conflicts, ConflictMap};
use crate::store::error::StoreResult;
use crate::store::repository::FullStore;
use crate::views::filtering::{conflict_courts, filter_courts, filter_people};

/// Everything the schedule page renders, derived from one store revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleView {
    pub revision: u64,
    pub filter: SportFilter,
    /// Courts passing the sport filter.
    pub courts: Vec<Court>,
    /// Pool players bookable under the filter.
    pub players: Vec<Person>,
    /// Pool coaches bookable under the filter.
    pub coaches: Vec<Person>,
    /// Full coach double-booking map (unfiltered).
    pub conflicts: ConflictMap,
    /// Courts with at least one conflict entry.
    pub conflict_courts: Vec<Court>,
}

/// Memoized derivation over a store.
pub struct DerivedViews {
    store: Arc<dyn FullStore>,
    grid: TimeGrid,
    cache: Mutex<Option<ScheduleView>>,
}

impl DerivedViews {
    pub fn new(store: Arc<dyn FullStore>, grid: TimeGrid) -> Self {
        DerivedViews {
            store,
            grid,
            cache: Mutex::new(None),
        }
    }

    /// The current view for `filter`, recomputed only when the store
    /// revision or the filter changed since the cached derivation.
    pub async fn current(&self, filter: SportFilter) -> StoreResult<ScheduleView> {
        let revision = self.store.revision().await?;
        if let Some(cached) = self.cache.lock().as_ref() {
            if cached.revision == revision && cached.filter == filter {
                return Ok(cached.clone());
            }
        }

        let courts = self.store.courts().await?;
        let pool = self.store.available_people().await?;
        let conflicts = coach_conflicts(&courts, &self.grid);

        let players: Vec<Person> = pool.iter().filter(|p| p.is_player()).cloned().collect();
        let coaches: Vec<Person> = pool.iter().filter(|p| p.is_coach()).cloned().collect();

        let view = ScheduleView {
            revision,
            filter,
            courts: filter_courts(&courts, filter),
            players: filter_people(&players, filter),
            coaches: filter_people(&coaches, filter),
            conflict_courts: conflict_courts(&courts, &conflicts),
            conflicts,
        };

        *self.cache.lock() = Some(view.clone());
        Ok(view)
    }

    /// Drop the cached derivation.
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }
}
