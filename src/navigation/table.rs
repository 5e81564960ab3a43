use thiserror::Error;

use crate::models::{Route, View};

/// Path of the login page; the guard's redirect target.
pub const LOGIN_PATH: &str = "/login";

/// Problems detected while assembling the navigation layer. Navigation itself
/// never fails; these only surface at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route path `{0}` must start with '/'")]
    InvalidPath(String),
    #[error("route path `{0}` is declared more than once")]
    DuplicatePath(String),
    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),
    #[error("login path `{0}` does not resolve to a route")]
    UnknownLoginRoute(String),
    #[error("login route `{0}` must not require authentication")]
    LoginRequiresAuth(String),
    #[error("base url `{0}` must not contain a query or fragment")]
    InvalidBase(String),
}

/// RouteTable
///
/// Ordered list of routes. Paths and names are unique, so resolution yields
/// at most one route; order only matters for the first-match rule.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validates and builds a table.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        for (idx, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(route.path.clone()));
            }

            let earlier = &routes[..idx];
            if earlier.iter().any(|r| paths_match(&r.path, &route.path)) {
                return Err(RouteTableError::DuplicatePath(route.path.clone()));
            }
            if earlier.iter().any(|r| r.name == route.name) {
                return Err(RouteTableError::DuplicateName(route.name.clone()));
            }
        }

        Ok(Self { routes })
    }

    /// The portal's table: the dashboard behind auth and the public login page.
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route::new("/", "dashboard", View::Dashboard).requires_auth(),
                Route::new(LOGIN_PATH, "login", View::Login),
            ],
        }
    }

    /// Resolves an app-relative path. `None` means 404, which callers handle.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| paths_match(&route.path, path))
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Non-strict, case-insensitive comparison: one trailing slash is ignored.
fn paths_match(declared: &str, candidate: &str) -> bool {
    trim_trailing_slash(declared).eq_ignore_ascii_case(trim_trailing_slash(candidate))
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
