//! Presentation layer: host router and CLI command dispatch.

/// CLI command dispatch.
pub mod commands;
/// Guarded host router.
pub mod navigator;

pub use commands::{CommandError, execute};
pub use navigator::{NavigationOutcome, Navigator};
