//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Session and navigation services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AuthOperation, LoginRequest, RegisterRequest};
pub use services::{NavigationGuard, NavigationIntent, SessionStore};
pub use use_cases::{HydrateSessionUseCase, HydrationMiss};
