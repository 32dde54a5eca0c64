use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading or writing `config.toml`.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("invalid navigation config in {path}: {source}")]
    TomlDe {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level keys whose loss would silently change which routes are guarded.
const NAVIGATION_KEYS: [&str; 2] = ["navigation", "routes"];

/// Loads `config.toml`, creating it with defaults on first run.
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a new `ConfigManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `ConfigManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the application configuration.
    ///
    /// A missing file is created with defaults. A malformed file is left
    /// untouched and defaults are used, unless it configures navigation or
    /// routes: those faults are fatal.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, the default cannot be
    /// written, or a file declaring `[navigation]` or `[[routes]]` fails to parse.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(
                "Config file not found at {:?}, creating default.",
                config_path
            );
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) if declares_navigation(&content) => Err(ConfigError::TomlDe {
                path: config_path.display().to_string(),
                source: e,
            }),
            Err(e) => {
                warn!("Failed to parse config file: {}. Using defaults.", e);
                Ok(AppConfig::default())
            }
        }
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

fn declares_navigation(content: &str) -> bool {
    if let Ok(table) = toml::from_str::<toml::Table>(content) {
        return NAVIGATION_KEYS.iter().any(|key| table.contains_key(*key));
    }
    // Not even valid TOML: look for the section headers themselves.
    content.lines().map(str::trim_start).any(|line| {
        NAVIGATION_KEYS.iter().any(|key| {
            line.strip_prefix("[[")
                .or_else(|| line.strip_prefix('['))
                .is_some_and(|rest| rest.trim_start().starts_with(key))
        })
    })
}
