use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use crate::api::util::headers::error_alert_headers;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // Entity resources
        .nest("/api", crate::api::routes::point_routes::point_routes())

        // Fallback handler for 404
        .fallback(handler_404)
        .layer(middleware::map_response_with_state(state.clone(), error_alert_headers))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
