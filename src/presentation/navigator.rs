//! Host router: holds the current route and applies guard outcomes.

use tracing::{error, info};

use crate::application::{NavigationGuard, NavigationIntent};
use crate::domain::entities::RouteName;
use crate::domain::ports::SessionReader;
use crate::domain::services::GuardOutcome;

/// Where a navigation ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Route the navigator now shows.
    pub route: RouteName,
    /// The requested target when the guard sent us elsewhere.
    pub redirected_from: Option<String>,
}

impl NavigationOutcome {
    /// Whether the guard changed the destination.
    #[must_use]
    pub const fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Host router that consults the guard before every transition.
pub struct Navigator {
    guard: NavigationGuard,
    current: RouteName,
}

impl Navigator {
    /// Creates a navigator showing `initial`.
    #[must_use]
    pub fn new(guard: NavigationGuard, initial: impl Into<RouteName>) -> Self {
        Self {
            guard,
            current: initial.into(),
        }
    }

    /// Returns the route currently shown.
    #[must_use]
    pub const fn current(&self) -> &RouteName {
        &self.current
    }

    /// Returns the guard in use.
    #[must_use]
    pub const fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    /// Moves to `origin` without consulting the guard.
    ///
    /// Only used to seed where a one-shot navigation starts from.
    pub fn set_origin(&mut self, origin: &str) {
        self.current = self.route_name(origin);
    }

    /// Runs the guard for `target` and applies its outcome.
    ///
    /// A redirect target is checked once more; a second redirect means the
    /// policy loops, which startup validation rules out, so the navigator
    /// falls back to the login route.
    pub fn navigate(&mut self, target: &str, session: &dyn SessionReader) -> NavigationOutcome {
        let from = self.current.as_str().to_string();

        let redirect = match self.evaluate(target, &from, session) {
            GuardOutcome::Proceed => {
                self.current = self.route_name(target);
                return NavigationOutcome {
                    route: self.current.clone(),
                    redirected_from: None,
                };
            }
            GuardOutcome::Redirect(redirect) => redirect,
        };

        info!(requested = target, redirect = %redirect, "Navigation redirected");
        self.current = match self.evaluate(redirect.as_str(), &from, session) {
            GuardOutcome::Proceed => redirect,
            GuardOutcome::Redirect(again) => {
                error!(
                    requested = target,
                    first = %redirect,
                    second = %again,
                    "Guard redirected twice, falling back to login"
                );
                self.guard.policy().login_route.clone()
            }
        };

        NavigationOutcome {
            route: self.current.clone(),
            redirected_from: Some(target.to_string()),
        }
    }

    fn evaluate(&self, target: &str, from: &str, session: &dyn SessionReader) -> GuardOutcome {
        self.guard
            .evaluate(NavigationIntent::new(target, Some(from)), session)
    }

    fn route_name(&self, target: &str) -> RouteName {
        self.guard
            .table()
            .resolve(target)
            .map_or_else(|| RouteName::new(target), |route| route.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{RouteTable, default_routes};
    use crate::domain::services::NavigationPolicy;
    use std::cell::Cell;

    fn navigator() -> Navigator {
        let table = RouteTable::new(default_routes()).unwrap();
        let guard = NavigationGuard::new(table, NavigationPolicy::default()).unwrap();
        Navigator::new(guard, "Home")
    }

    /// Reports signed-out on the first read and signed-in afterwards.
    struct FlippingSession {
        reads: Cell<u32>,
    }

    impl SessionReader for FlippingSession {
        fn is_authenticated(&self) -> Option<bool> {
            let reads = self.reads.get();
            self.reads.set(reads + 1);
            Some(reads > 0)
        }
    }

    #[test]
    fn test_proceed_moves_to_target() {
        let mut nav = navigator();
        let outcome = nav.navigate("Profile", &true);

        assert_eq!(outcome.route, "Profile");
        assert!(!outcome.was_redirected());
        assert_eq!(nav.current(), &RouteName::from("Profile"));
    }

    #[test]
    fn test_anonymous_protected_route_lands_on_login() {
        let mut nav = navigator();
        let outcome = nav.navigate("Matches", &false);

        assert_eq!(outcome.route, "Login");
        assert_eq!(outcome.redirected_from.as_deref(), Some("Matches"));
    }

    #[test]
    fn test_signed_in_auth_screen_lands_on_discover() {
        let mut nav = navigator();
        let outcome = nav.navigate("Register", &true);

        assert_eq!(outcome.route, "Discover");
        assert_eq!(outcome.redirected_from.as_deref(), Some("Register"));
    }

    #[test]
    fn test_path_target_resolves_to_route_name() {
        let mut nav = navigator();
        let outcome = nav.navigate("/messages/17", &true);

        assert_eq!(outcome.route, "Messages");
    }

    #[test]
    fn test_unknown_target_is_entered_as_is() {
        let mut nav = navigator();
        let outcome = nav.navigate("/about", &false);

        assert_eq!(outcome.route, "/about");
        assert!(!outcome.was_redirected());
    }

    #[test]
    fn test_second_redirect_falls_back_to_login() {
        let mut nav = navigator();
        let session = FlippingSession {
            reads: Cell::new(0),
        };

        // Signed out: Profile -> Login; then signed in: Login -> Discover.
        let outcome = nav.navigate("Profile", &session);

        assert_eq!(outcome.route, "Login");
        assert_eq!(session.reads.get(), 2);
    }

    #[test]
    fn test_set_origin_skips_guard() {
        let mut nav = navigator();
        nav.set_origin("/settings");
        assert_eq!(nav.current(), &RouteName::from("Settings"));
    }
}
