use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

// --- Route Table Schemas ---

/// View
///
/// Reference to a view component owned by the rendering layer. The navigation
/// layer never renders anything itself; it only decides which view should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum View {
    Dashboard,
    Login,
}

impl View {
    /// Stable identifier used in HTML shells and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Login => "login",
        }
    }
}

/// RouteMeta
///
/// Per-route annotations consulted by the navigation guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RouteMeta {
    // Routes default to public.
    #[serde(default)]
    pub requires_auth: bool,
}

/// Route
///
/// A single path-to-view mapping in the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Route {
    // Literal path, always starting with '/'.
    pub path: String,
    // Unique name, usable for named navigation.
    pub name: String,
    // View component rendered for this route.
    #[serde(rename = "component")]
    pub view: View,
    #[serde(default)]
    pub meta: RouteMeta,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            meta: RouteMeta::default(),
        }
    }

    /// Marks the route as only reachable with a session token.
    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }
}

// --- Navigation Outcomes ---

/// Navigation
///
/// Final outcome of a navigation after the guard ran. `Redirected` carries the
/// originally requested path so callers can preserve it (e.g. for a post-login return).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum Navigation {
    Rendered { route: Route },
    Redirected { requested: String, route: Route },
    NotFound { path: String },
}

impl Navigation {
    /// The route that ends up on screen, if any.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Navigation::Rendered { route } | Navigation::Redirected { route, .. } => Some(route),
            Navigation::NotFound { .. } => None,
        }
    }
}

// --- Request Payloads ---

/// NavigationQuery
///
/// Query parameters for `GET /api/navigation`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct NavigationQuery {
    /// Target URL (relative to the site root, including the base URL).
    pub to: String,
    /// URL the client is navigating away from, if any.
    pub from: Option<String>,
}
