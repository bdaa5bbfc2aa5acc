//! The schedule store: the single authoritative schedule state.
//!
//! # Architecture
//!
//! The store follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application layer (front end, tests)                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service layer (services/) - assignment, conflicts,     │
//! │  hour budgets, deferred validation                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Store traits (repository.rs) - narrow command interface│
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │              LocalStore (in-memory)           │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! All mutation flows through the command interface; the view layer reads
//! cloned snapshots and the revision counter, never live references.

pub mod checksum;
pub mod error;
pub mod local;
pub mod repository;

pub use checksum::calculate_checksum;
pub use error::{ErrorContext, StoreError, StoreResult};
pub use local::LocalStore;
pub use repository::{FullStore, ScheduleCommands, SnapshotStore};
