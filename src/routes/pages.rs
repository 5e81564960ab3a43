use crate::{AppState, handlers};
use axum::Router;

/// Page Router Module
///
/// Catches every URL not claimed by the API and hands it to the navigation
/// router, which decides between rendering, redirecting to login, and 404.
pub fn page_routes() -> Router<AppState> {
    Router::new().fallback(handlers::render_page)
}
