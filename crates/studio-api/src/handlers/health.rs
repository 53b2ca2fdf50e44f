//! Health check handlers.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use studio_core::error::AppError;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api and GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    state.store.health_check().await?;

    Ok(Json(HealthResponse {
        server_status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.provider().to_string(),
    }))
}
