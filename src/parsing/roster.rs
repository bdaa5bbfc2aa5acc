//! Roster spreadsheet import.
//!
//! Accepts a CSV export with the columns name/nome, type/tipo, email,
//! phone/telefono, programId, notes/note. Every row yields a [`RosterRow`]
//! carrying either an imported person or a human-readable error; invalid
//! rows are excluded from the committed import and never abort the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use uuid::Uuid;

use crate::api::{PersonId, ProgramId};
use crate::models::person::{Person, PersonKind};

#[derive(Debug, Deserialize)]
struct RosterRecord {
    #[serde(default, alias = "nome")]
    name: Option<String>,
    #[serde(default, rename = "type", alias = "tipo")]
    kind: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, alias = "telefono")]
    phone: Option<String>,
    #[serde(default, rename = "programId")]
    program_id: Option<String>,
    #[serde(default, alias = "note")]
    notes: Option<String>,
}

/// One spreadsheet row's import outcome.
#[derive(Debug, Clone, Serialize)]
pub struct RosterRow {
    /// 1-based line in the file, counting the header.
    pub line: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
}

/// The full import outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RosterImport {
    pub rows: Vec<RosterRow>,
}

impl RosterImport {
    /// The valid subset, ready to commit.
    pub fn people(&self) -> Vec<Person> {
        self.rows
            .iter()
            .filter(|r| r.valid)
            .filter_map(|r| r.person.clone())
            .collect()
    }

    pub fn imported_count(&self) -> usize {
        self.rows.iter().filter(|r| r.valid).count()
    }

    pub fn error_count(&self) -> usize {
        self.rows.len() - self.imported_count()
    }
}

fn parse_kind(raw: Option<&str>) -> Result<PersonKind, String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(PersonKind::Player);
    };
    match raw.to_lowercase().as_str() {
        "player" | "giocatore" | "atleta" => Ok(PersonKind::Player),
        "coach" | "allenatore" | "maestro" => Ok(PersonKind::Coach),
        other => Err(format!("Tipo non valido: {}", other)),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn row_from_record(line: usize, record: RosterRecord) -> RosterRow {
    let name = record.name.as_deref().unwrap_or("").trim().to_string();
    if name.is_empty() {
        return RosterRow {
            line,
            valid: false,
            error: Some("Nome mancante".to_string()),
            person: None,
        };
    }

    let kind = match parse_kind(record.kind.as_deref()) {
        Ok(kind) => kind,
        Err(error) => {
            return RosterRow {
                line,
                valid: false,
                error: Some(error),
                person: None,
            }
        }
    };

    let mut person = Person::new(PersonId::new(Uuid::new_v4().to_string()), name, kind);
    person.email = non_empty(record.email);
    person.phone = non_empty(record.phone);
    person.notes = non_empty(record.notes);
    person.program_id = non_empty(record.program_id).map(ProgramId::new);

    RosterRow {
        line,
        valid: true,
        error: None,
        person: Some(person),
    }
}

/// Parse a roster CSV from any reader.
///
/// Row-level problems (missing name, unknown type, malformed row) are
/// collected on the row; only an unreadable stream fails the call.
pub fn parse_roster_csv<R: Read>(reader: R) -> Result<RosterImport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.deserialize::<RosterRecord>().enumerate() {
        // Header occupies line 1.
        let line = index + 2;
        match result {
            Ok(record) => rows.push(row_from_record(line, record)),
            Err(e) => rows.push(RosterRow {
                line,
                valid: false,
                error: Some(format!("Riga non leggibile: {}", e)),
                person: None,
            }),
        }
    }

    let import = RosterImport { rows };
    log::info!(
        "Roster import parsed: {} valid, {} rejected",
        import.imported_count(),
        import.error_count()
    );
    Ok(import)
}

/// Parse a roster CSV file from disk.
pub fn parse_roster_file<P: AsRef<Path>>(path: P) -> Result<RosterImport> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open roster file {}", path.display()))?;
    parse_roster_csv(file)
}
