//! Domain types for the catalog and its quarantine lock.

mod audit;
mod entry;
mod lock;
mod stats;

pub use audit::AuditLogEntry;
pub use entry::{Entry, EntryName, NewEntry};
pub use lock::IntegrityLock;
pub use stats::{BaseStats, STAT_RANGE, Stat};
