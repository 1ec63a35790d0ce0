use dioxus::prelude::*;
use thiserror::Error;

mod fragment;
mod navigator;

pub use fragment::{on_hash_change, BrowserFragment, UrlFragment};
pub use navigator::Navigator;

/// One navigable location: an exact URL path, a symbolic name for
/// programmatic navigation and the view mounted while the route is active.
/// The view is an ordinary component taking no props; the router only holds
/// the reference, mounting stays with Dioxus.
#[derive(Clone)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: Component,
}

/// Rejected route table. Surfaces once at startup, before the app becomes
/// interactive.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RouteConfigError {
    #[error("duplicate route path {0:?}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name {0:?}")]
    DuplicateName(&'static str),
}

/// No route matched the requested path or name. Recoverable: the app keeps
/// running and shows its not-found view.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("no route matches {target:?}")]
pub struct NotFound {
    pub target: String,
}

/// Ordered route list, immutable once registered.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds the table from an ordered list of routes. Paths and names must
    /// each be unique across the table.
    pub fn register(routes: Vec<Route>) -> Result<Self, RouteConfigError> {
        for (index, route) in routes.iter().enumerate() {
            for earlier in &routes[..index] {
                if earlier.path == route.path {
                    return Err(RouteConfigError::DuplicatePath(route.path));
                }
                if earlier.name == route.name {
                    return Err(RouteConfigError::DuplicateName(route.name));
                }
            }
        }
        Ok(RouteTable { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Looks up a route by exact path equality.
    pub fn resolve(&self, path: &str) -> Result<&Route, NotFound> {
        self.position(|route| route.path == path)
            .map(|index| &self.routes[index])
            .ok_or_else(|| NotFound {
                target: path.to_string(),
            })
    }

    fn position(&self, matches: impl Fn(&Route) -> bool) -> Option<usize> {
        self.routes.iter().position(|route| matches(route))
    }
}

/// Navigator as wired at launch, driving the browser's address bar.
pub type AppNavigator = Navigator<BrowserFragment>;

/// Grabs the navigator the root component provides to the tree.
pub fn use_navigator(cx: &ScopeState) -> &UseRef<AppNavigator> {
    cx.use_hook(|_| {
        cx.consume_context::<UseRef<AppNavigator>>()
            .expect("no navigator provided above this component")
    })
}
