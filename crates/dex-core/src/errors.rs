//! Cross-cutting error types.
//!
//! Crate-specific errors (`GatewayError`, `LockError`, `ViewError`) live in
//! their own crates. They converge into `anyhow` only in `dex-cli`.

use thiserror::Error;

/// Errors that can be raised by any `dex-*` crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A quarantine transition was attempted that is not allowed.
    #[error("Invalid state transition: {event} is not allowed from {from}")]
    InvalidTransition { from: String, event: String },

    /// Data failed validation (ranges, required fields, tag counts).
    #[error("Validation error: {0}")]
    Validation(String),
}
