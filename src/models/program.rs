//! Training programs and sport classification.

use serde::{Deserialize, Serialize};

use crate::api::ProgramId;

/// Sport / court surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    Padel,
    TennisClay,
    TennisHard,
    Fitness,
    Swimming,
}

/// Sport filter selected in the console.
///
/// `Tennis` is an umbrella value matching both tennis surfaces; every other
/// value matches its sport exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SportFilter {
    Padel,
    Tennis,
    TennisClay,
    TennisHard,
    Fitness,
    Swimming,
}

impl SportFilter {
    pub fn matches(self, sport: Sport) -> bool {
        match self {
            SportFilter::Padel => sport == Sport::Padel,
            SportFilter::Tennis => matches!(sport, Sport::TennisClay | Sport::TennisHard),
            SportFilter::TennisClay => sport == Sport::TennisClay,
            SportFilter::TennisHard => sport == Sport::TennisHard,
            SportFilter::Fitness => sport == Sport::Fitness,
            SportFilter::Swimming => sport == Sport::Swimming,
        }
    }
}

/// A named training package.
///
/// The program's color drives all visual derivation of person/program color.
/// Default session durations and hour caps are program-keyed rule tables in
/// the engine configuration, external to the entity itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_week_hours: Option<f64>,
}

impl Program {
    pub fn new(id: ProgramId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Program {
            id,
            name: name.into(),
            color: color.into(),
            total_week_hours: None,
        }
    }

    pub fn with_week_hours(mut self, hours: f64) -> Self {
        self.total_week_hours = Some(hours);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tennis_umbrella_filter() {
        assert!(SportFilter::Tennis.matches(Sport::TennisClay));
        assert!(SportFilter::Tennis.matches(Sport::TennisHard));
        assert!(!SportFilter::Tennis.matches(Sport::Padel));
        assert!(SportFilter::TennisClay.matches(Sport::TennisClay));
        assert!(!SportFilter::TennisClay.matches(Sport::TennisHard));
    }
}
