//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::application::NavigationGuard;
use crate::domain::entities::{RouteDescriptor, RouteTable, default_routes};
use crate::domain::errors::RouteTableError;
use crate::domain::services::NavigationPolicy;
use crate::infrastructure::api::DEFAULT_API_URL;
use crate::infrastructure::storage::{SESSION_FILE_NAME, StorageBackend};

pub(super) const APP_NAME: &str = "hinge-shell";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "vibe-code";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Authentication API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Redirect targets used by the navigation guard.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Replacement route table; the built-in table is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<RouteDescriptor>>,
}

/// Authentication API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root, e.g. `http://localhost:8080/api/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Session persistence configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend holding the session entries.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Session file path for the file backend.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Navigation policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Route anonymous visitors are sent to.
    #[serde(default = "default_login_route")]
    pub login_route: String,

    /// Registration route.
    #[serde(default = "default_register_route")]
    pub register_route: String,

    /// Where signed-in users land when they open an auth screen.
    #[serde(default = "default_landing_route")]
    pub landing_route: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            login_route: default_login_route(),
            register_route: default_register_route(),
            landing_route: default_landing_route(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_login_route() -> String {
    "Login".to_string()
}

fn default_register_route() -> String {
    "Register".to_string()
}

fn default_landing_route() -> String {
    "Discover".to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = &args.api_url {
            self.api.base_url.clone_from(api_url);
        }
        if let Some(timeout) = args.timeout_secs {
            self.api.timeout_secs = timeout;
        }
        if let Some(backend) = args.storage {
            self.storage.backend = backend;
        }
        if let Some(session_path) = &args.session_path {
            self.storage.path = Some(session_path.clone());
        }
        if let Some(landing) = &args.landing_route {
            self.navigation.landing_route.clone_from(landing);
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("hinge-shell.log"))
    }

    /// Returns default session file path.
    #[must_use]
    pub fn default_session_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(SESSION_FILE_NAME))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective session file path, falling back to the working directory.
    #[must_use]
    pub fn effective_session_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .or_else(Self::default_session_path)
            .unwrap_or_else(|| PathBuf::from(SESSION_FILE_NAME))
    }

    /// Returns the configured navigation policy.
    #[must_use]
    pub fn navigation_policy(&self) -> NavigationPolicy {
        NavigationPolicy::new(
            self.navigation.login_route.as_str(),
            self.navigation.register_route.as_str(),
            self.navigation.landing_route.as_str(),
        )
    }

    /// Builds the validated route table.
    ///
    /// # Errors
    /// Returns error if the configured table is malformed.
    pub fn route_table(&self) -> Result<RouteTable, RouteTableError> {
        RouteTable::new(self.routes.clone().unwrap_or_else(default_routes))
    }

    /// Builds the navigation guard. Configuration faults surface here, at startup.
    ///
    /// # Errors
    /// Returns error if the table or policy is invalid.
    pub fn navigation_guard(&self) -> Result<NavigationGuard, RouteTableError> {
        NavigationGuard::new(self.route_table()?, self.navigation_policy())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_level: LogLevel::Info,
            log_path: None,
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            navigation: NavigationConfig::default(),
            routes: None,
        }
    }
}
