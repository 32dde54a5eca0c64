//! Domain layer with core entities, port definitions and the navigation rules.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Pure decision services.
pub mod services;

pub use entities::{
    Credentials, RouteDescriptor, RouteName, RouteTable, Session, SessionToken, User, UserId,
};
pub use errors::{AuthError, RouteTableError, StorageError};
pub use ports::{AuthPort, SessionReader, SessionStoragePort};
pub use services::{GuardOutcome, NavigationPolicy};
