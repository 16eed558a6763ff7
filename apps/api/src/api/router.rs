use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{developers, health};
use crate::application::DeveloperService;

/// Builds the application router around a developer service
pub fn build_router(service: Arc<DeveloperService>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Developer routes
        .route("/developers", get(developers::list_developers))
        .route("/developers/:member_id", get(developers::get_developer))
        .route("/create-developer", post(developers::create_developer))
        .route(
            "/developer/:member_id",
            put(developers::edit_developer).delete(developers::delete_developer),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(service)
}
