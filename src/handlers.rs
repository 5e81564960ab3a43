use crate::{
    AppState,
    auth::ClientSession,
    models::{Navigation, NavigationQuery, Route, View},
};
use axum::{
    Json,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};

// --- API Handlers ---

/// get_routes
///
/// [Public Route] Publishes the route table so the SPA bootstrap can register
/// the same paths, names and `requiresAuth` flags.
#[utoipa::path(
    get,
    path = "/api/routes",
    responses((status = 200, description = "Route table", body = [Route]))
)]
pub async fn get_routes(State(state): State<AppState>) -> Json<Vec<Route>> {
    Json(state.router.manifest())
}

/// get_navigation
///
/// [Public Route] Runs a navigation for the calling client's session and
/// reports the outcome without rendering anything.
#[utoipa::path(
    get,
    path = "/api/navigation",
    params(NavigationQuery),
    responses((status = 200, description = "Navigation outcome", body = Navigation))
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    session: ClientSession,
    Query(query): Query<NavigationQuery>,
) -> Json<Navigation> {
    let navigation = state
        .router
        .push(&query.to, query.from.as_deref(), &session);
    Json(navigation)
}

// --- Page Handler ---

/// render_page
///
/// Fallback for every other GET or HEAD: resolves the URL through the router and
/// either serves the application shell for the resolved view, redirects to
/// the login page, or answers 404.
pub async fn render_page(
    State(state): State<AppState>,
    session: ClientSession,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let history = state.router.history();

    match state.router.push(uri.path(), None, &session) {
        Navigation::Rendered { route } => Html(app_shell(history.base(), route.view)).into_response(),
        Navigation::Redirected { route, .. } => Redirect::to(&history.href(&route.path)).into_response(),
        Navigation::NotFound { path } => {
            tracing::debug!(%path, "page not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Minimal HTML document; the view components mount into `#app`.
fn app_shell(base: &str, view: View) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<base href=\"{base}\">\n<title>Portal</title>\n</head>\n<body>\n<div id=\"app\" data-view=\"{view}\"></div>\n</body>\n</html>\n",
        view = view.as_str(),
    )
}
