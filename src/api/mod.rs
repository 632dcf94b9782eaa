//! REST API layer: route handlers, OpenAPI document, and router composition.
//!
//! Resource endpoints are mounted under `/api`; system endpoints live at
//! the root.

pub mod handlers;
pub mod openapi;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the fully layered application bound to `state`.
///
/// Adds request tracing, permissive CORS for the marketing site, and the
/// Swagger UI when the `swagger-ui` feature is enabled.
pub fn build_app(state: AppState) -> Router {
    let router = build_router();

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(openapi::swagger_ui());

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
