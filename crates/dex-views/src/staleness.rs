//! Superseded-request detection.
//!
//! Requests may resolve out of issue order. Each request takes a [`Ticket`]
//! when issued; its response is applied only if no later ticket was issued
//! in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct LatestTracker {
    issued: AtomicU64,
}

impl LatestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding every earlier one.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }
}
