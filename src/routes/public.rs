use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints reachable by any client, logged in or not.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for load balancers.
        .route("/health", get(|| async { "ok" }))
        // GET /api/routes
        // Route manifest for the SPA bootstrap.
        .route("/api/routes", get(handlers::get_routes))
        // GET /api/navigation?to=...&from=...
        // Dry-run of a navigation for the caller's session.
        .route("/api/navigation", get(handlers::get_navigation))
}
