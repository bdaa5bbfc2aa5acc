//! User-facing notification sink.
//!
//! Notifications are fire-and-forget: nothing consumes a return value, and a
//! lost notice loses nothing but a toast. The in-memory sink retains notices
//! for the front end to drain.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single user-facing notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub timestamp: DateTime<Utc>,
    pub level: NoticeLevel,
    pub message: String,
}

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// In-memory sink retaining notices until drained.
#[derive(Clone, Default)]
pub struct MemoryNotifier {
    notices: Arc<RwLock<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.read().clone()
    }

    /// Remove and return all retained notices.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.write())
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.read().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        log::debug!("notice [{:?}] {}", level, message);
        self.notices.write().push(Notice {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
        });
    }
}

/// Sink that forwards to the log facade and keeps nothing.
#[derive(Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info | NoticeLevel::Success => log::info!("{}", message),
            NoticeLevel::Warning => log::warn!("{}", message),
            NoticeLevel::Error => log::error!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_retains_and_drains() {
        let notifier = MemoryNotifier::new();
        notifier.notify(NoticeLevel::Success, "assigned Anna to Padel 1");
        notifier.notify(NoticeLevel::Warning, "coach double-booked");

        assert_eq!(notifier.notices().len(), 2);
        assert_eq!(notifier.last().unwrap().level, NoticeLevel::Warning);

        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert!(notifier.notices().is_empty());
    }
}
