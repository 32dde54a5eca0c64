//! Hinge shell - session management and route guarding for the hinge client.
//!
//! This crate owns the authenticated session (login, registration, logout,
//! persistence and hydration) and the navigation guard that decides which
//! routes a visitor may enter, with a small CLI host on top.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the session store, guard and use cases.
pub mod application;
/// Domain layer containing entities, errors, ports and navigation rules.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the navigator and command dispatch.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "hinge-shell";
