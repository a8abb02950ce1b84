//! # dex-core
//!
//! Core types and error types for the Pokédex client.
//!
//! This crate provides the foundational types shared across all `dex-*` crates:
//! - Catalog entries (`Entry`, `EntryName`) as fetched from the data store
//! - The fixed base-stat key set (`Stat`, `BaseStats`) with range validation
//! - Creation payloads (`NewEntry`)
//! - Audit log records, read-only on the client
//! - The client-owned `IntegrityLock` record
//! - Cross-cutting error types

pub mod entities;
pub mod errors;

pub use entities::{
    AuditLogEntry, BaseStats, Entry, EntryName, IntegrityLock, NewEntry, STAT_RANGE, Stat,
};
pub use errors::CoreError;
