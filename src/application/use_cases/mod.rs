//! Use case implementations.

mod hydrate_session_use_case;

pub use hydrate_session_use_case::{HydrateSessionUseCase, HydrationMiss, TOKEN_KEY, USER_KEY};
