//! CLI command dispatch.

use std::io::Write;

use thiserror::Error;
use tracing::debug;

use super::navigator::Navigator;
use crate::application::{LoginRequest, RegisterRequest, SessionStore};
use crate::domain::entities::User;
use crate::domain::errors::AuthError;
use crate::infrastructure::config::Command;

/// Failure of a CLI command.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CommandError {
    #[error("{message}")]
    Auth {
        message: String,
        #[source]
        source: AuthError,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Runs one command against an already hydrated store and writes a
/// human-readable report to `out`.
///
/// # Errors
/// Returns [`CommandError::Auth`] when login or registration fails, carrying
/// the message the session recorded.
pub async fn execute<W: Write>(
    command: Command,
    store: &SessionStore,
    navigator: &mut Navigator,
    out: &mut W,
) -> Result<(), CommandError> {
    debug!(command = command.name(), "Executing command");
    match command {
        Command::Login { email, password } => {
            let result = store.login(LoginRequest::new(email, password)).await;
            report_auth(result, store, out)
        }
        Command::Register {
            email,
            password,
            first_name,
            last_name,
        } => {
            let request = RegisterRequest::new(email, password, first_name, last_name);
            let result = store.register(request).await;
            report_auth(result, store, out)
        }
        Command::Logout => {
            let was_signed_in = store.is_authenticated();
            store.logout();
            if was_signed_in {
                writeln!(out, "Signed out")?;
            } else {
                writeln!(out, "No active session")?;
            }
            Ok(())
        }
        Command::Status => {
            let session = store.snapshot();
            match session.credentials() {
                Some(credentials) => {
                    writeln!(out, "Signed in as {}", describe(credentials.user()))?;
                    writeln!(out, "Token: {}", credentials.token())?;
                }
                None => writeln!(out, "Not signed in")?,
            }
            Ok(())
        }
        Command::Navigate { target, from } => {
            if let Some(from) = from {
                navigator.set_origin(&from);
            }
            let origin = navigator.current().clone();
            let outcome = navigator.navigate(&target, store);
            match &outcome.redirected_from {
                Some(requested) => writeln!(
                    out,
                    "{origin} -> {requested}: redirected to {}",
                    outcome.route
                )?,
                None => writeln!(out, "{origin} -> {target}: allowed ({})", outcome.route)?,
            }
            Ok(())
        }
        Command::Routes => {
            let policy = navigator.guard().policy();
            for route in navigator.guard().table().iter() {
                let access = if route.requires_auth {
                    "protected"
                } else {
                    "public"
                };
                let role = if route.name == policy.login_route {
                    " [login]"
                } else if route.name == policy.register_route {
                    " [register]"
                } else if route.name == policy.landing_route {
                    " [landing]"
                } else {
                    ""
                };
                writeln!(
                    out,
                    "{:<12} {:<20} {access}{role}",
                    route.name.as_str(),
                    route.path
                )?;
            }
            Ok(())
        }
    }
}

fn report_auth<W: Write>(
    result: Result<User, AuthError>,
    store: &SessionStore,
    out: &mut W,
) -> Result<(), CommandError> {
    match result {
        Ok(user) => {
            writeln!(out, "Signed in as {}", describe(&user))?;
            Ok(())
        }
        Err(source) => {
            let message = store.error().unwrap_or_else(|| source.to_string());
            Err(CommandError::Auth { message, source })
        }
    }
}

fn describe(user: &User) -> String {
    let name = user.display_name();
    if name == user.email() {
        format!("{} (id {})", user.email(), user.id())
    } else {
        format!("{name} <{}> (id {})", user.email(), user.id())
    }
}
