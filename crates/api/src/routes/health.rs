use axum::{http::StatusCode, routing::get, Router};

use crate::state::AppState;

pub const HEALTHY: &str = "Healthy";

/// Create health check router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/alive", get(alive))
}

/// Readiness: the app is up and can take traffic
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTHY)
}

/// Liveness
pub async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTHY)
}
