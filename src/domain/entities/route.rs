//! Static route table entities.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::errors::RouteTableError;

/// Unique name of a navigable screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteName(String);

impl RouteName {
    /// Creates a route name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RouteName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for RouteName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Static metadata for one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Path pattern; `:param` segments match any single segment.
    pub path: String,
    /// Unique route name.
    pub name: RouteName,
    /// Whether an authenticated session is needed to enter.
    #[serde(default, alias = "requiresAuth")]
    pub requires_auth: bool,
}

impl RouteDescriptor {
    /// Route open to every visitor.
    #[must_use]
    pub fn public(name: &str, path: &str) -> Self {
        Self {
            path: path.to_string(),
            name: RouteName::new(name),
            requires_auth: false,
        }
    }

    /// Route that requires a session.
    #[must_use]
    pub fn protected(name: &str, path: &str) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(name, path)
        }
    }

    /// Returns whether a concrete path matches this descriptor's pattern.
    #[must_use]
    pub fn matches_path(&self, path: &str) -> bool {
        let pattern: Vec<&str> = segments(&self.path).collect();
        let concrete: Vec<&str> = segments(strip_query(path)).collect();

        pattern.len() == concrete.len()
            && pattern
                .iter()
                .zip(&concrete)
                .all(|(expected, actual)| expected.starts_with(':') || expected == actual)
    }

    fn pattern_key(&self) -> String {
        let key: Vec<&str> = segments(&self.path)
            .map(|segment| if segment.starts_with(':') { ":" } else { segment })
            .collect();
        format!("/{}", key.join("/"))
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Ordered, validated list of route descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Builds a table, rejecting empty, duplicate or malformed entries.
    ///
    /// # Errors
    /// Returns [`RouteTableError`] describing the first invalid entry.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for route in &routes {
            if route.name.as_str().trim().is_empty() {
                return Err(RouteTableError::EmptyName {
                    path: route.path.clone(),
                });
            }
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath {
                    name: route.name.to_string(),
                    path: route.path.clone(),
                });
            }
            if !names.insert(route.name.clone()) {
                return Err(RouteTableError::DuplicateName {
                    name: route.name.to_string(),
                });
            }
            if !paths.insert(route.pattern_key()) {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.clone(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// Finds a route by its unique name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Finds the first route whose pattern matches a concrete path.
    #[must_use]
    pub fn by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.matches_path(path))
    }

    /// Resolves a navigation target given either as a name or a path.
    #[must_use]
    pub fn resolve(&self, target: &str) -> Option<&RouteDescriptor> {
        if target.starts_with('/') {
            self.by_path(target)
        } else {
            self.by_name(target)
        }
    }

    /// Iterates routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Screens of the dating client, in declaration order.
#[must_use]
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::public("Home", "/"),
        RouteDescriptor::public("Login", "/login"),
        RouteDescriptor::public("Register", "/register"),
        RouteDescriptor::protected("Onboarding", "/onboarding"),
        RouteDescriptor::protected("Discover", "/discover"),
        RouteDescriptor::protected("Matches", "/matches"),
        RouteDescriptor::protected("Messages", "/messages/:matchId"),
        RouteDescriptor::protected("Profile", "/profile"),
        RouteDescriptor::protected("Settings", "/settings"),
    ]
}
