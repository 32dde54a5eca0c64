//! Infrastructure layer with external service adapters.

/// Authentication API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Session storage adapters.
pub mod storage;

pub use api::HttpAuthClient;
pub use config::{AppConfig, CliArgs, Command, ConfigManager, LogLevel};
pub use storage::{
    FileSessionStorage, KeyringSessionStorage, MemorySessionStorage, StorageBackend, open_storage,
};
