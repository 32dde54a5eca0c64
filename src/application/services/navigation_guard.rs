//! Navigation authorization over a validated route table.

use tracing::{debug, warn};

use crate::domain::entities::{RouteDescriptor, RouteName, RouteTable};
use crate::domain::errors::RouteTableError;
use crate::domain::ports::SessionReader;
use crate::domain::services::navigation::{self, GuardOutcome, NavigationPolicy};

/// A requested transition, by route name or concrete path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIntent<'a> {
    /// Route name or concrete path being entered.
    pub target: &'a str,
    /// Route the transition starts from, if any.
    pub source: Option<&'a str>,
}

impl<'a> NavigationIntent<'a> {
    /// Creates an intent.
    #[must_use]
    pub const fn new(target: &'a str, source: Option<&'a str>) -> Self {
        Self { target, source }
    }
}

/// Sole enforcement point for route access.
///
/// Construction validates the policy against the table so that every redirect
/// target exists and a redirect can never trigger a second one.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    table: RouteTable,
    policy: NavigationPolicy,
}

impl NavigationGuard {
    /// Validates and builds the guard.
    ///
    /// # Errors
    /// Returns [`RouteTableError`] when a policy route is missing from the
    /// table or would make redirects loop.
    pub fn new(table: RouteTable, policy: NavigationPolicy) -> Result<Self, RouteTableError> {
        let login = Self::require(&table, "login", &policy.login_route)?;
        Self::require(&table, "register", &policy.register_route)?;
        Self::require(&table, "landing", &policy.landing_route)?;

        if login.requires_auth {
            return Err(RouteTableError::ProtectedLoginRoute {
                name: policy.login_route.to_string(),
            });
        }
        if policy.is_auth_screen(&policy.landing_route) {
            return Err(RouteTableError::LandingIsAuthScreen {
                name: policy.landing_route.to_string(),
            });
        }

        Ok(Self { table, policy })
    }

    fn require<'t>(
        table: &'t RouteTable,
        role: &'static str,
        name: &RouteName,
    ) -> Result<&'t RouteDescriptor, RouteTableError> {
        table
            .by_name(name.as_str())
            .ok_or_else(|| RouteTableError::UnknownRedirectTarget {
                role,
                name: name.to_string(),
            })
    }

    /// Evaluates one transition against the current session.
    #[must_use]
    pub fn evaluate(&self, intent: NavigationIntent<'_>, session: &dyn SessionReader) -> GuardOutcome {
        let target = self.table.resolve(intent.target);
        let source = intent.source.and_then(|source| self.table.resolve(source));
        let is_authenticated = session.is_authenticated();

        if is_authenticated.is_none() {
            warn!(target = intent.target, "Session state unavailable, restricting navigation");
        }
        if target.is_none() {
            debug!(target = intent.target, "Target not in route table, treating as public");
        }

        let outcome = navigation::decide(target, source, is_authenticated, &self.policy);
        debug!(
            target = intent.target,
            source = intent.source.unwrap_or("-"),
            ?is_authenticated,
            ?outcome,
            "Navigation evaluated"
        );
        outcome
    }

    /// Returns the validated route table.
    #[must_use]
    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Returns the redirect policy.
    #[must_use]
    pub const fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::default_routes;

    fn guard(landing: &str) -> NavigationGuard {
        let table = RouteTable::new(default_routes()).unwrap();
        NavigationGuard::new(table, NavigationPolicy::new("Login", "Register", landing)).unwrap()
    }

    #[test]
    fn test_anonymous_profile_redirects_to_login() {
        let outcome = guard("Home").evaluate(NavigationIntent::new("Profile", Some("Home")), &false);
        assert_eq!(outcome, GuardOutcome::Redirect("Login".into()));
    }

    #[test]
    fn test_signed_in_login_redirects_to_landing() {
        let outcome = guard("Home").evaluate(NavigationIntent::new("Login", None), &true);
        assert_eq!(outcome, GuardOutcome::Redirect("Home".into()));
    }

    #[test]
    fn test_redirect_target_is_stable() {
        let guard = guard("Discover");

        for authenticated in [false, true] {
            for route in guard.table().iter() {
                let first = guard.evaluate(NavigationIntent::new(route.name.as_str(), None), &authenticated);
                if let GuardOutcome::Redirect(target) = first {
                    let second = guard.evaluate(
                        NavigationIntent::new(target.as_str(), Some(route.name.as_str())),
                        &authenticated,
                    );
                    assert_eq!(second, GuardOutcome::Proceed, "{} -> {target}", route.name);
                }
            }
        }
    }

    #[test]
    fn test_paths_resolve_like_names() {
        let guard = guard("Discover");
        assert_eq!(
            guard.evaluate(NavigationIntent::new("/messages/99", None), &false),
            GuardOutcome::Redirect("Login".into())
        );
        assert_eq!(
            guard.evaluate(NavigationIntent::new("/no/such/screen", None), &false),
            GuardOutcome::Proceed
        );
    }

    #[test]
    fn test_unknown_policy_route_rejected_at_startup() {
        let table = RouteTable::new(default_routes()).unwrap();
        let result = NavigationGuard::new(table, NavigationPolicy::new("Login", "Register", "Feed"));

        assert_eq!(
            result.unwrap_err(),
            RouteTableError::UnknownRedirectTarget {
                role: "landing",
                name: "Feed".to_string()
            }
        );
    }

    #[test]
    fn test_looping_policies_rejected() {
        let table = RouteTable::new(default_routes()).unwrap();
        assert!(matches!(
            NavigationGuard::new(table.clone(), NavigationPolicy::new("Profile", "Register", "Home")),
            Err(RouteTableError::ProtectedLoginRoute { .. })
        ));
        assert!(matches!(
            NavigationGuard::new(table, NavigationPolicy::new("Login", "Register", "Register")),
            Err(RouteTableError::LandingIsAuthScreen { .. })
        ));
    }

    #[test]
    fn test_unavailable_session_redirects_to_login() {
        let outcome = guard("Home").evaluate(NavigationIntent::new("Home", None), &None::<bool>);
        assert_eq!(outcome, GuardOutcome::Redirect("Login".into()));
    }
}
