//! Explicit user confirmation before destructive requests.

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// A fixed answer, e.g. from a `--yes` flag.
impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

/// Result of an action gated by [`Confirm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<T> {
    /// The user declined; no request was issued.
    Declined,
    Completed(T),
}

impl<T> Confirmation<T> {
    #[must_use]
    pub const fn is_declined(&self) -> bool {
        matches!(self, Self::Declined)
    }
}
