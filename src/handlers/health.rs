//! # Health Check Handler
//!
//! Readiness endpoint reporting storage connectivity. The domain core does
//! not depend on this endpoint; the process uses it to report readiness to
//! its environment.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db;
use crate::error::ApiError;
use crate::server::AppState;

/// Health check response payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status
    #[schema(example = "ok")]
    pub status: String,
    /// Storage connectivity as observed by a probe query
    #[schema(example = "reachable")]
    pub database: String,
}

/// Reports whether the service and its storage backend are ready
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Storage backend unreachable", body = ApiError)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    match db::health_check(&state.db).await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "ok".to_string(),
            database: "reachable".to_string(),
        })),
        Err(err) => {
            tracing::error!("Health check failed: {:?}", err);
            Err(ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Database connectivity check failed",
            ))
        }
    }
}
