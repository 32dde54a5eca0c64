//! Route table configuration errors.

use thiserror::Error;

/// Startup faults in the route table or navigation policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum RouteTableError {
    #[error("route table is empty")]
    Empty,

    #[error("route name must not be empty (path `{path}`)")]
    EmptyName { path: String },

    #[error("route `{name}` has invalid path `{path}`: paths must start with '/'")]
    InvalidPath { name: String, path: String },

    #[error("duplicate route name `{name}`")]
    DuplicateName { name: String },

    #[error("duplicate route path `{path}`")]
    DuplicatePath { path: String },

    #[error("{role} route `{name}` is not present in the route table")]
    UnknownRedirectTarget { role: &'static str, name: String },

    #[error("login route `{name}` must not require authentication")]
    ProtectedLoginRoute { name: String },

    #[error("landing route `{name}` must not be an authentication screen")]
    LandingIsAuthScreen { name: String },
}
