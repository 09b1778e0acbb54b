//! # Providers API Handlers
//!
//! This module contains handlers for the provider profile endpoints:
//! registration, composite detail reads, sparse profile patches, profile
//! removal, and catalog line item creation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::dto::{
    CreateProviderProfileDto, CreateServiceItemDto, ProviderDetailsResponse, ProviderProfileInfo,
    ProviderServiceInfo, UpdateProviderProfileDto,
};
use crate::server::AppState;

/// Register a new provider profile
#[utoipa::path(
    post,
    path = "/providers",
    request_body = CreateProviderProfileDto,
    responses(
        (status = 201, description = "Profile created", body = ProviderProfileInfo),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 409, description = "User already owns a profile", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "providers"
)]
pub async fn create_provider(
    State(state): State<AppState>,
    Json(request): Json<CreateProviderProfileDto>,
) -> Result<(StatusCode, Json<ProviderProfileInfo>), ApiError> {
    let profile = state.catalog.register_profile(&request).await?;
    Ok((StatusCode::CREATED, Json(profile.into())))
}

/// Fetch a profile together with its full service catalog
#[utoipa::path(
    get,
    path = "/providers/{id}",
    params(
        ("id" = String, Path, description = "Provider profile identifier")
    ),
    responses(
        (status = 200, description = "Profile with its services", body = ProviderDetailsResponse, example = json!({
            "profile": {
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "user_id": "u1",
                "business_name": "Joe's Garage",
                "category": "GARAGE",
                "phone": "0771234567",
                "address": "12 Main St",
                "created_at": "2025-06-10T10:30:00Z",
                "updated_at": "2025-06-10T10:30:00Z"
            },
            "services": [
                {
                    "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                    "provider_id": "550e8400-e29b-41d4-a716-446655440000",
                    "name": "Oil Change",
                    "price": 2500,
                    "created_at": "2025-06-10T10:31:00Z",
                    "updated_at": "2025-06-10T10:31:00Z"
                }
            ]
        })),
        (status = 404, description = "Provider not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "providers"
)]
pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProviderDetailsResponse>, ApiError> {
    let details = state.catalog.provider_details(id).await?;
    Ok(Json(details))
}

/// Apply a sparse patch to an existing profile
#[utoipa::path(
    patch,
    path = "/providers/{id}",
    params(
        ("id" = String, Path, description = "Provider profile identifier")
    ),
    request_body = UpdateProviderProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProviderProfileInfo),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 404, description = "Provider not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "providers"
)]
pub async fn update_provider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProviderProfileDto>,
) -> Result<Json<ProviderProfileInfo>, ApiError> {
    let updated = state.catalog.update_profile(id, &request).await?;
    Ok(Json(updated.into()))
}

/// Remove a profile together with every service it owns
#[utoipa::path(
    delete,
    path = "/providers/{id}",
    params(
        ("id" = String, Path, description = "Provider profile identifier")
    ),
    responses(
        (status = 204, description = "Profile and owned services removed"),
        (status = 404, description = "Provider not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "providers"
)]
pub async fn delete_provider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.catalog.remove_provider(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a catalog line item to an existing profile
#[utoipa::path(
    post,
    path = "/providers/{id}/services",
    params(
        ("id" = String, Path, description = "Provider profile identifier")
    ),
    request_body = CreateServiceItemDto,
    responses(
        (status = 201, description = "Service created", body = ProviderServiceInfo),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 404, description = "Provider not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "providers"
)]
pub async fn create_provider_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateServiceItemDto>,
) -> Result<(StatusCode, Json<ProviderServiceInfo>), ApiError> {
    let service = state.catalog.add_service(id, &request).await?;
    Ok((StatusCode::CREATED, Json(service.into())))
}
