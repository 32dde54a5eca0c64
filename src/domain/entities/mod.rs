//! Domain entity definitions.

mod route;
mod session;
mod token;
mod user;

pub use route::{RouteDescriptor, RouteName, RouteTable, default_routes};
pub use session::{Credentials, Session};
pub use token::SessionToken;
pub use user::{User, UserId};
