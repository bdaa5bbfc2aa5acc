#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;

use courtplan::api::{CourtId, PersonId, ProgramId};
use courtplan::config::EngineConfig;
use courtplan::models::{Court, Person, PersonKind, Program, Sport};
use courtplan::services::{AssignmentService, MemoryNotifier};
use courtplan::store::{FullStore, LocalStore};

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
}

pub fn player(id: &str, name: &str) -> Person {
    Person::new(PersonId::new(id), name, PersonKind::Player)
}

pub fn coach(id: &str, name: &str) -> Person {
    Person::new(PersonId::new(id), name, PersonKind::Coach)
}

/// A coach already placed on a court, for driving the conflict detector
/// directly.
pub fn placed_coach(id: &str, name: &str, slot: &str, end: Option<&str>) -> Person {
    let mut person = coach(id, name);
    person.time_slot = Some(slot.to_string());
    person.end_time_slot = end.map(str::to_string);
    person
}

pub fn court(id: &str, sport: Sport, name: &str, number: u32) -> Court {
    Court::new(CourtId::new(id), sport, name, number)
}

pub fn default_courts() -> Vec<Court> {
    vec![
        court("c1", Sport::Padel, "Padel 1", 1),
        court("c2", Sport::TennisClay, "Clay 1", 2),
        court("c3", Sport::TennisHard, "Hard 1", 3),
    ]
}

pub fn default_programs() -> Vec<Program> {
    vec![
        Program::new(ProgramId::new("agonistica"), "Agonistica", "#112233"),
        Program::new(ProgramId::new("scuola"), "Scuola Tennis", "#445566").with_week_hours(4.0),
    ]
}

pub fn local_store(courts: Vec<Court>, pool: Vec<Person>) -> Arc<LocalStore> {
    Arc::new(LocalStore::new(
        test_date(),
        courts,
        pool,
        default_programs(),
    ))
}

/// Store + assignment service + notifier wired together.
pub struct Harness {
    pub store: Arc<LocalStore>,
    pub service: AssignmentService,
    pub notifier: MemoryNotifier,
}

pub fn harness(pool: Vec<Person>) -> Harness {
    let store = local_store(default_courts(), pool);
    let notifier = MemoryNotifier::new();
    let dyn_store: Arc<dyn FullStore> = store.clone();
    let service = AssignmentService::new(
        dyn_store,
        EngineConfig::default(),
        Arc::new(notifier.clone()),
    )
    .unwrap();
    Harness {
        store,
        service,
        notifier,
    }
}
