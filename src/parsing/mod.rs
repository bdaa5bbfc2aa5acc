//! Parsers for bulk data entry.
//!
//! - [`roster`]: roster spreadsheet (CSV) import mapping rows to people,
//!   collecting per-row errors instead of failing the whole file

pub mod roster;


pub use roster::{parse_roster_csv, parse_roster_file, RosterImport, RosterRow};
