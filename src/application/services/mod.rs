//! Application services.

mod navigation_guard;
mod session_store;

pub use navigation_guard::{NavigationGuard, NavigationIntent};
pub use session_store::SessionStore;
