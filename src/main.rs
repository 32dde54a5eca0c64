use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hinge_shell::application::SessionStore;
use hinge_shell::infrastructure::{AppConfig, CliArgs, ConfigManager, HttpAuthClient, open_storage};
use hinge_shell::presentation::{CommandError, Navigator, execute};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_session(config: &AppConfig) -> Result<(SessionStore, Navigator)> {
    let guard = config
        .navigation_guard()
        .wrap_err("invalid route configuration")?;

    let auth_client = HttpAuthClient::with_base_url(&config.api.base_url, config.api.timeout())?;
    info!(base_url = auth_client.base_url(), "Using authentication API");

    let storage = open_storage(config.storage.backend, config.effective_session_path());
    let store = SessionStore::hydrated(Arc::new(auth_client), storage);

    let initial = guard.table().iter().next().map_or_else(
        || guard.policy().login_route.clone(),
        |route| route.name.clone(),
    );
    let navigator = Navigator::new(guard, initial);

    Ok((store, navigator))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = hinge_shell::VERSION, "Starting {}", hinge_shell::NAME);

    let (store, mut navigator) = create_session(&config)?;

    let mut stdout = std::io::stdout().lock();
    match execute(args.command, &store, &mut navigator, &mut stdout).await {
        Ok(()) => Ok(()),
        Err(CommandError::Auth { message, source }) => {
            Err(color_eyre::Report::new(source).wrap_err(message))
        }
        Err(err) => Err(err.into()),
    }
}
