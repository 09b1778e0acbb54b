//! # Services API Handlers
//!
//! This module contains handlers for catalog line items addressed by their
//! own identifier.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::AppState;

/// Remove a single catalog line item
#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(
        ("id" = String, Path, description = "Service item identifier")
    ),
    responses(
        (status = 204, description = "Service removed"),
        (status = 404, description = "Service not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.catalog.remove_service(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
