//! Pure navigation rules: redirect policy and the guard decision.

use crate::domain::entities::{RouteDescriptor, RouteName};

/// Result of a single guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Enter the requested route unchanged.
    Proceed,
    /// Enter the named route instead.
    Redirect(RouteName),
}

impl GuardOutcome {
    /// Whether the transition may go ahead.
    #[must_use]
    pub const fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// Returns the redirect target, if any.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<&RouteName> {
        match self {
            Self::Proceed => None,
            Self::Redirect(name) => Some(name),
        }
    }
}

/// Names of the routes the guard redirects to or treats specially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPolicy {
    /// Route anonymous visitors are sent to.
    pub login_route: RouteName,
    /// Registration screen, treated like login for signed-in users.
    pub register_route: RouteName,
    /// Route signed-in users are sent to from an auth screen.
    pub landing_route: RouteName,
}

impl NavigationPolicy {
    /// Creates a policy from route names.
    #[must_use]
    pub fn new(
        login_route: impl Into<RouteName>,
        register_route: impl Into<RouteName>,
        landing_route: impl Into<RouteName>,
    ) -> Self {
        Self {
            login_route: login_route.into(),
            register_route: register_route.into(),
            landing_route: landing_route.into(),
        }
    }

    /// Returns whether the named route is the login or register screen.
    #[must_use]
    pub fn is_auth_screen(&self, name: &RouteName) -> bool {
        *name == self.login_route || *name == self.register_route
    }
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self::new("Login", "Register", "Discover")
    }
}

/// Decides whether a transition into `target` may happen.
///
/// Rules, first match wins:
/// 1. protected target while unauthenticated: redirect to login;
/// 2. login or register target while authenticated: redirect to landing;
/// 3. otherwise proceed.
///
/// A target missing from the route table is public. An unobservable session
/// (`None`) is handled as the most restrictive case: everything except the
/// login screen itself redirects to login. The source route never changes
/// the outcome.
#[must_use]
pub fn decide(
    target: Option<&RouteDescriptor>,
    _source: Option<&RouteDescriptor>,
    is_authenticated: Option<bool>,
    policy: &NavigationPolicy,
) -> GuardOutcome {
    let Some(is_authenticated) = is_authenticated else {
        return match target {
            Some(route) if route.name == policy.login_route => GuardOutcome::Proceed,
            _ => GuardOutcome::Redirect(policy.login_route.clone()),
        };
    };

    let requires_auth = target.is_some_and(|route| route.requires_auth);
    if requires_auth && !is_authenticated {
        return GuardOutcome::Redirect(policy.login_route.clone());
    }

    if is_authenticated && target.is_some_and(|route| policy.is_auth_screen(&route.name)) {
        return GuardOutcome::Redirect(policy.landing_route.clone());
    }

    GuardOutcome::Proceed
}
