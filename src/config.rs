//! Engine configuration file support.
//!
//! Reads engine settings from TOML: the day window and slot granularity,
//! per-program session durations and hour caps, default colors, and the
//! deferred-validation delay. Every field has a serde default so a partial
//! file (or no file at all) still yields a working configuration.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::ProgramId;
use crate::models::person::PersonKind;
use crate::models::time_grid::TimeGrid;
use crate::store::error::StoreError;

/// Engine configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub day: DaySettings,
    #[serde(default)]
    pub defaults: DefaultSettings,
    /// Program-id-keyed rule overrides. Programs absent here fall back to
    /// the built-in rule table, then to the flat defaults.
    #[serde(default)]
    pub programs: HashMap<String, ProgramRule>,
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// Day window and slot granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySettings {
    #[serde(default = "default_day_start")]
    pub start: String,
    #[serde(default = "default_day_end")]
    pub end: String,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
}

/// Flat defaults applied when no program rule matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSettings {
    #[serde(default = "default_session_hours")]
    pub session_hours: f64,
    #[serde(default = "default_daily_cap_hours")]
    pub daily_cap_hours: f64,
    #[serde(default = "default_player_color")]
    pub player_color: String,
    #[serde(default = "default_coach_color")]
    pub coach_color: String,
}

/// Per-program session and budget rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramRule {
    #[serde(default = "default_session_hours")]
    pub session_hours: f64,
    #[serde(default = "default_daily_cap_hours")]
    pub daily_cap_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_cap_hours: Option<f64>,
}

/// Deferred-validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Delay before the post-drop conflict validation runs. Purely a
    /// debounce so rapid successive moves don't spam notifications.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_day_start() -> String {
    "08:00".to_string()
}

fn default_day_end() -> String {
    "22:00".to_string()
}

fn default_slot_minutes() -> u32 {
    30
}

fn default_session_hours() -> f64 {
    1.0
}

fn default_daily_cap_hours() -> f64 {
    2.0
}

fn default_player_color() -> String {
    "#2f6fde".to_string()
}

fn default_coach_color() -> String {
    "#e8913a".to_string()
}

fn default_debounce_ms() -> u64 {
    600
}

impl Default for DaySettings {
    fn default() -> Self {
        DaySettings {
            start: default_day_start(),
            end: default_day_end(),
            slot_minutes: default_slot_minutes(),
        }
    }
}

impl Default for DefaultSettings {
    fn default() -> Self {
        DefaultSettings {
            session_hours: default_session_hours(),
            daily_cap_hours: default_daily_cap_hours(),
            player_color: default_player_color(),
            coach_color: default_coach_color(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        ValidationSettings {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Built-in program rule table, overridable per id from the config file.
static BUILTIN_PROGRAM_RULES: Lazy<HashMap<&'static str, ProgramRule>> = Lazy::new(|| {
    HashMap::from([
        (
            "agonistica",
            ProgramRule {
                session_hours: 2.0,
                daily_cap_hours: 3.0,
                weekly_cap_hours: Some(12.0),
            },
        ),
        (
            "scuola",
            ProgramRule {
                session_hours: 1.0,
                daily_cap_hours: 2.0,
                weekly_cap_hours: Some(4.0),
            },
        ),
        (
            "mini",
            ProgramRule {
                session_hours: 1.0,
                daily_cap_hours: 1.0,
                weekly_cap_hours: Some(2.0),
            },
        ),
    ])
});

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(StoreError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            StoreError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `courtplan.toml` in the current directory, a `config/`
    /// subdirectory, and the parent directory. Falls back to the built-in
    /// defaults when no file is found.
    pub fn from_default_location() -> Self {
        let search_paths = [
            PathBuf::from("courtplan.toml"),
            PathBuf::from("config/courtplan.toml"),
            PathBuf::from("../courtplan.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                    }
                }
            }
        }

        EngineConfig::default()
    }

    /// Build the day time grid from the configured window.
    pub fn time_grid(&self) -> Result<TimeGrid, StoreError> {
        TimeGrid::new(&self.day.start, &self.day.end, self.day.slot_minutes)
            .map_err(StoreError::configuration)
    }

    fn rule_for(&self, program: Option<&ProgramId>) -> Option<&ProgramRule> {
        let id = program?;
        self.programs
            .get(id.as_str())
            .or_else(|| BUILTIN_PROGRAM_RULES.get(id.as_str()))
    }

    /// Default session duration for a program, in hours.
    pub fn session_hours_for(&self, program: Option<&ProgramId>) -> f64 {
        self.rule_for(program)
            .map(|r| r.session_hours)
            .unwrap_or(self.defaults.session_hours)
    }

    /// Daily hour cap for a program.
    pub fn daily_cap_for(&self, program: Option<&ProgramId>) -> f64 {
        self.rule_for(program)
            .map(|r| r.daily_cap_hours)
            .unwrap_or(self.defaults.daily_cap_hours)
    }

    /// Weekly hour cap for a program, when one is defined.
    pub fn weekly_cap_for(&self, program: Option<&ProgramId>) -> Option<f64> {
        self.rule_for(program).and_then(|r| r.weekly_cap_hours)
    }

    /// Fallback display color for a person without a program color.
    pub fn default_color_for(&self, kind: PersonKind) -> &str {
        match kind {
            PersonKind::Player => &self.defaults.player_color,
            PersonKind::Coach => &self.defaults.coach_color,
        }
    }

    /// Deferred-validation debounce delay.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.validation.debounce_ms)
    }
}
