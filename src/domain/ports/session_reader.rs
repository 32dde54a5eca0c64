//! Read-only view of authentication state consumed by the navigation guard.

/// Source of the `is_authenticated` predicate.
pub trait SessionReader {
    /// Returns whether a session token is held, or `None` if the state
    /// could not be observed.
    fn is_authenticated(&self) -> Option<bool>;
}

impl SessionReader for bool {
    fn is_authenticated(&self) -> Option<bool> {
        Some(*self)
    }
}

impl SessionReader for Option<bool> {
    fn is_authenticated(&self) -> Option<bool> {
        *self
    }
}
