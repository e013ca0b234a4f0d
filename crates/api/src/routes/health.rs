use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::handlers::fallback;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /api/health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = flashdeck_db::health_check(&state.pool).await.is_ok();

    let (status, message) = if db_healthy {
        ("ok", "Server is running")
    } else {
        ("degraded", "Database is unreachable")
    };

    Json(HealthResponse {
        status,
        message,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount the health check route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
