//! Route definitions
//!
//! Reaction routes are mounted under /api/v1; health checks sit at the root.
//! Anything else answers with the usual JSON error body.

use axum::{
    http::Uri,
    routing::{delete, get, post},
    Router,
};
use reactions_service::ServiceError;

use crate::handlers::{health, reactions};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
        .fallback(route_not_found)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::Service(ServiceError::not_found("Route", uri.path()))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/reactions", post(reactions::save_reaction))
        .route("/posts/:post_id/reactions", get(reactions::list_reactions))
        .route(
            "/posts/:post_id/reactions/summary",
            get(reactions::summarize_reactions),
        )
        .route(
            "/users/:user_id/posts/:post_id/reactions/:emoji_name",
            delete(reactions::delete_reaction),
        )
}
