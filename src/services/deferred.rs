//! Debounced post-drop conflict validation.
//!
//! A coach drop schedules a validation pass behind a short delay; a newer
//! drop replaces the pending one, so rapid successive moves produce a single
//! notification instead of a burst. The delay is purely a debounce:
//! correctness never depends on it, and teardown or a day switch discards
//! any pending run.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::models::time_grid::TimeGrid;
use crate::services::conflicts::coach_conflicts;
use crate::services::notify::{NoticeLevel, Notifier};
use crate::store::repository::FullStore;

/// Schedules conflict validation runs behind a debounce delay.
pub struct DeferredValidator {
    store: Arc<dyn FullStore>,
    grid: TimeGrid,
    notifier: Arc<dyn Notifier>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DeferredValidator {
    pub fn new(
        store: Arc<dyn FullStore>,
        grid: TimeGrid,
        notifier: Arc<dyn Notifier>,
        delay: Duration,
    ) -> Self {
        DeferredValidator {
            store,
            grid,
            notifier,
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule a validation pass, replacing any pending one.
    pub fn schedule(&self) {
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let store = Arc::clone(&self.store);
        let grid = self.grid.clone();
        let notifier = Arc::clone(&self.notifier);
        let delay = self.delay;

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match store.courts().await {
                Ok(courts) => {
                    let conflicts = coach_conflicts(&courts, &grid);
                    if conflicts.is_empty() {
                        notifier.notify(NoticeLevel::Success, "No coach conflicts detected");
                    } else {
                        notifier.notify(
                            NoticeLevel::Warning,
                            &format!("Coach double-booked on {} court(s)", conflicts.len()),
                        );
                    }
                }
                Err(e) => log::warn!("Deferred validation skipped: {}", e),
            }
        }));
    }

    /// Discard any pending validation run.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for DeferredValidator {
    fn drop(&mut self) {
        self.cancel();
    }
}
