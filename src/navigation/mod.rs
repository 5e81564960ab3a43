/// Navigation Module Index
///
/// Client-side navigation for the portal: the route table, the history mode
/// that maps URLs onto app paths, the auth guard, and the router instance
/// that ties them together.

/// Static path-to-view mapping.
pub mod table;

/// Web-history mode with a base URL.
pub mod history;

/// The `before_each` auth guard.
pub mod guard;

/// The router instance consumed by the application bootstrap.
pub mod router;

pub use guard::{GuardDecision, NavigationGuard};
pub use history::WebHistory;
pub use router::NavigationRouter;
pub use table::{RouteTable, RouteTableError};
