use super::app_config::LogLevel;
use crate::infrastructure::storage::StorageBackend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments; every flag overrides its `config.toml` value.
#[derive(Debug, Parser)]
#[command(
    name = "hinge-shell",
    version,
    about = "Session and navigation shell for the hinge dating client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Authentication API root.
    #[arg(long, env = "HINGE_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Session persistence backend.
    #[arg(long, value_enum, global = true)]
    pub storage: Option<StorageBackend>,

    /// Session file path (file backend).
    #[arg(long, value_name = "PATH", global = true)]
    pub session_path: Option<PathBuf>,

    /// Route signed-in users land on when opening an auth screen.
    #[arg(long, value_name = "ROUTE", global = true)]
    pub landing_route: Option<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Command to run once the session is hydrated.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
#[allow(missing_docs)]
pub enum Command {
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    /// Forget the local session.
    Logout,
    /// Show the current session.
    Status,
    /// Ask the guard whether a route may be entered.
    Navigate {
        /// Route name or path, e.g. `Profile` or `/messages/42`.
        target: String,
        /// Route the navigation starts from.
        #[arg(long)]
        from: Option<String>,
    },
    /// List the route table.
    Routes,
}

impl Command {
    /// Subcommand name, safe to log.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Register { .. } => "register",
            Self::Logout => "logout",
            Self::Status => "status",
            Self::Navigate { .. } => "navigate",
            Self::Routes => "routes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "hinge-shell",
            "navigate",
            "/messages/3",
            "--from",
            "Discover",
            "--storage",
            "memory",
        ]);

        assert_eq!(args.storage, Some(StorageBackend::Memory));
        assert_eq!(
            args.command,
            Command::Navigate {
                target: "/messages/3".to_string(),
                from: Some("Discover".to_string()),
            }
        );
        assert_eq!(args.command.name(), "navigate");
    }

    #[test]
    fn test_register_requires_names() {
        let result = CliArgs::try_parse_from([
            "hinge-shell",
            "register",
            "--email",
            "a@b.com",
            "--password",
            "pw",
        ]);
        assert!(result.is_err());
    }
}
