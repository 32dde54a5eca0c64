//! Pure domain services.

pub mod navigation;

pub use navigation::{GuardOutcome, NavigationPolicy, decide};
