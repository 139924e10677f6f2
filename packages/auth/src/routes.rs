//! # Route table and access policy
//!
//! The client's pages are described by a [`RouteTable`]: an ordered list of
//! [`RouteDescriptor`]s, each carrying [`RouteMeta`] flags that say who may
//! visit it. The table is data only; the decision itself lives in
//! [`crate::guard`].
//!
//! | Path | Name | Component | Access |
//! |------|------|-----------|--------|
//! | `/login` | [`RouteName::Login`] | `LoginPage` | guests only |
//! | `/` | [`RouteName::Start`] | `StartPage` | signed-in users |
//! | `/game` | [`RouteName::Game`] | `GameScreen` | signed-in users |
//! | `/highscores` | [`RouteName::Highscores`] | `HighscorePage` | everyone |

use std::fmt;

use crate::guard::{guard, NavigationOutcome};

/// Stable name of a route, used for programmatic navigation and redirects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Start,
    Game,
    Highscores,
}

impl RouteName {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::Login => "Login",
            RouteName::Start => "Start",
            RouteName::Game => "Game",
            RouteName::Highscores => "Highscores",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may navigate to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessPolicy {
    #[default]
    None,
    RequiresAuth,
    RequiresGuest,
}

impl AccessPolicy {
    /// Whether a visitor with the given sign-in state may open the route.
    pub fn admits(self, authenticated: bool) -> bool {
        match self {
            AccessPolicy::None => true,
            AccessPolicy::RequiresAuth => authenticated,
            AccessPolicy::RequiresGuest => !authenticated,
        }
    }
}

/// Per-route access flags.
///
/// At most one flag is meant to be set. If both are, `requires_auth` wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
}

impl RouteMeta {
    pub const PUBLIC: RouteMeta = RouteMeta {
        requires_auth: false,
        requires_guest: false,
    };
    pub const AUTH: RouteMeta = RouteMeta {
        requires_auth: true,
        requires_guest: false,
    };
    pub const GUEST: RouteMeta = RouteMeta {
        requires_auth: false,
        requires_guest: true,
    };

    pub fn policy(&self) -> AccessPolicy {
        if self.requires_auth {
            AccessPolicy::RequiresAuth
        } else if self.requires_guest {
            AccessPolicy::RequiresGuest
        } else {
            AccessPolicy::None
        }
    }
}

impl From<AccessPolicy> for RouteMeta {
    fn from(policy: AccessPolicy) -> Self {
        match policy {
            AccessPolicy::None => RouteMeta::PUBLIC,
            AccessPolicy::RequiresAuth => RouteMeta::AUTH,
            AccessPolicy::RequiresGuest => RouteMeta::GUEST,
        }
    }
}

/// One entry of the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// URL path, always starting with `/`.
    pub path: &'static str,
    pub name: RouteName,
    /// Name of the view component rendered for this route.
    pub component: &'static str,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    pub const fn new(
        path: &'static str,
        name: RouteName,
        component: &'static str,
        meta: RouteMeta,
    ) -> Self {
        Self {
            path,
            name,
            component,
            meta,
        }
    }
}

/// Capability to request a client-side navigation.
///
/// Passed explicitly to actions that navigate (see
/// [`crate::AuthStore::logout`]) instead of being captured by the store.
pub trait Navigate {
    fn navigate(&self, to: RouteName);
}

impl<F: Fn(RouteName)> Navigate for F {
    fn navigate(&self, to: RouteName) {
        self(to)
    }
}

/// Ordered route descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// The arcade's four pages.
    pub fn arcade() -> Self {
        Self::new(vec![
            RouteDescriptor::new("/login", RouteName::Login, "LoginPage", RouteMeta::GUEST),
            RouteDescriptor::new("/", RouteName::Start, "StartPage", RouteMeta::AUTH),
            RouteDescriptor::new("/game", RouteName::Game, "GameScreen", RouteMeta::AUTH),
            RouteDescriptor::new(
                "/highscores",
                RouteName::Highscores,
                "HighscorePage",
                RouteMeta::PUBLIC,
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn by_name(&self, name: RouteName) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Find the route for a URL path. Query strings, fragments and a
    /// trailing slash are ignored.
    pub fn resolve(&self, url_path: &str) -> Option<&RouteDescriptor> {
        let path = url_path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        self.routes.iter().find(|r| r.path == path)
    }

    /// Run the guard for a navigation between two named routes.
    ///
    /// Names missing from the table are allowed through; unknown pages are
    /// the router's concern.
    pub fn check(
        &self,
        to: RouteName,
        from: Option<RouteName>,
        authenticated: bool,
    ) -> NavigationOutcome {
        let Some(target) = self.by_name(to) else {
            tracing::debug!(route = %to, "no descriptor for route, allowing");
            return NavigationOutcome::Allow;
        };
        let source = from.and_then(|name| self.by_name(name));
        guard(target, source, authenticated)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::arcade()
    }
}
