//! Domain error types.

mod auth_error;
mod route_error;
mod storage_error;

pub use auth_error::AuthError;
pub use route_error::RouteTableError;
pub use storage_error::StorageError;
