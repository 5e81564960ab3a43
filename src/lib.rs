use std::sync::Arc;

use axum::{Router, extract::FromRef, http::HeaderName};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod navigation;

// HTTP routing: JSON API and page fallback.
pub mod routes;
use routes::{pages, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use navigation::{NavigationRouter, RouteTableError};

/// ApiDoc
///
/// OpenAPI document for the JSON endpoints, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_routes, handlers::get_navigation),
    components(schemas(models::Route, models::RouteMeta, models::View, models::Navigation)),
    tags(
        (name = "portal-navigation", description = "Portal client navigation API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Shared, immutable state handed to every request.
#[derive(Clone)]
pub struct AppState {
    /// The navigation router; built once at startup.
    pub router: Arc<NavigationRouter>,
    /// The loaded environment configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Builds the state from configuration, validating the router setup.
    pub fn new(config: AppConfig) -> Result<Self, RouteTableError> {
        let router = NavigationRouter::standard(&config.base_url)?;
        Ok(Self {
            router: Arc::new(router),
            config,
        })
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for Arc<NavigationRouter> {
    fn from_ref(app_state: &AppState) -> Arc<NavigationRouter> {
        app_state.router.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the HTTP surface, applies the observability layers, and
/// registers the application state.
///
/// The page router is merged last and only contributes a fallback, so the
/// explicit API and documentation routes always win over page URLs; any path
/// they don't claim is resolved by the navigation router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        // Everything else is a page URL.
        .merge(pages::page_routes())
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span for every HTTP request, correlated by the `x-request-id` header.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
