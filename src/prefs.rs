//! Best-effort mirroring of UI cursor state.
//!
//! The console mirrors slider positions, the time cursor, and a global sync
//! signal into a small JSON file, read back opportunistically on startup.
//! The mirror is not authoritative: losing it resets a UI convenience
//! cursor and nothing else, so every failure here logs a warning and is
//! otherwise swallowed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Mirrored UI cursor state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiPrefs {
    /// Slider positions keyed by widget id, normalized 0..1.
    #[serde(default)]
    pub sliders: HashMap<String, f64>,
    /// Last time-cursor slot label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_cursor: Option<String>,
    /// Last global sync signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
}

/// Opportunistic JSON mirror of [`UiPrefs`].
pub struct PrefsMirror {
    path: PathBuf,
}

impl PrefsMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PrefsMirror { path: path.into() }
    }

    /// Read the mirrored prefs, falling back to defaults on any failure.
    pub fn load(&self) -> UiPrefs {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("No prefs mirror at {}: {}", self.path.display(), e);
                return UiPrefs::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Ignoring corrupt prefs mirror {}: {}", self.path.display(), e);
                UiPrefs::default()
            }
        }
    }

    /// Write the mirror. Failures are logged and swallowed.
    pub fn store(&self, prefs: &UiPrefs) {
        let json = match serde_json::to_string_pretty(prefs) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not serialize prefs: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            log::warn!("Could not mirror prefs to {}: {}", self.path.display(), e);
        }
    }

    /// Record a slider position and mirror immediately.
    pub fn set_slider(&self, widget: &str, value: f64) {
        let mut prefs = self.load();
        prefs.sliders.insert(widget.to_string(), value.clamp(0.0, 1.0));
        self.store(&prefs);
    }

    /// Record the time cursor and mirror immediately.
    pub fn set_time_cursor(&self, slot: &str) {
        let mut prefs = self.load();
        prefs.time_cursor = Some(slot.to_string());
        self.store(&prefs);
    }

    /// Stamp the global sync signal with the current time.
    pub fn record_sync(&self) {
        let mut prefs = self.load();
        prefs.last_sync = Some(Utc::now());
        self.store(&prefs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = PrefsMirror::new(dir.path().join("prefs.json"));

        mirror.set_slider("timeline", 0.75);
        mirror.set_time_cursor("14:30");
        mirror.record_sync();

        let prefs = mirror.load();
        assert_eq!(prefs.sliders.get("timeline"), Some(&0.75));
        assert_eq!(prefs.time_cursor.as_deref(), Some("14:30"));
        assert!(prefs.last_sync.is_some());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = PrefsMirror::new(dir.path().join("absent.json"));
        assert_eq!(mirror.load(), UiPrefs::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        let mirror = PrefsMirror::new(&path);
        assert_eq!(mirror.load(), UiPrefs::default());
    }

    #[test]
    fn test_slider_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = PrefsMirror::new(dir.path().join("prefs.json"));
        mirror.set_slider("timeline", 3.0);
        assert_eq!(mirror.load().sliders.get("timeline"), Some(&1.0));
    }
}
