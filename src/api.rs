//! Public API surface for the scheduling engine.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types produced by the service layer. All types derive
//! Serialize/Deserialize for JSON interchange with the front end.

pub use crate::services::assignment::{AssignmentOutcome, AssignmentRequest, AssignmentResult};
pub use crate::services::budget::{BudgetAdvice, BudgetSource};
pub use crate::services::conflicts::{ConflictMap, ConflictRecord, ConflictReport};
pub use crate::services::notify::{Notice, NoticeLevel};
pub use crate::views::derived::ScheduleView;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Person identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub String);

/// Court identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourtId(pub String);

/// Program identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

/// Activity identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActivityId(pub String);

/// Saved schedule template identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub Uuid);

impl PersonId {
    pub fn new(value: impl Into<String>) -> Self {
        PersonId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CourtId {
    pub fn new(value: impl Into<String>) -> Self {
        CourtId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ProgramId {
    pub fn new(value: impl Into<String>) -> Self {
        ProgramId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ActivityId {
    pub fn new(value: impl Into<String>) -> Self {
        ActivityId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TemplateId {
    /// Generate a fresh template id.
    pub fn generate() -> Self {
        TemplateId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for CourtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        PersonId(value.to_string())
    }
}
impl From<&str> for CourtId {
    fn from(value: &str) -> Self {
        CourtId(value.to_string())
    }
}
impl From<&str> for ProgramId {
    fn from(value: &str) -> Self {
        ProgramId(value.to_string())
    }
}
impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        ActivityId(value.to_string())
    }
}
