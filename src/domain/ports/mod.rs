mod auth_port;
mod session_reader;
mod session_storage_port;

pub use auth_port::AuthPort;
pub use session_reader::SessionReader;
pub use session_storage_port::SessionStoragePort;
