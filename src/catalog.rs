//! Provider catalog application layer
//!
//! This module composes the validation layer and the repositories into the
//! operations the HTTP boundary exposes. Every mutation is validated before
//! any repository call, so no invalid entity is ever persisted and a failed
//! validation never reaches storage.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::CatalogError;
use crate::models::dto::{
    CreateProviderProfileDto, CreateServiceItemDto, ProviderDetailsResponse,
    UpdateProviderProfileDto,
};
use crate::models::{provider_profile, provider_service};
use crate::repositories::{ProviderProfileRepository, ProviderServiceRepository};
use crate::validation;

/// Application service fronting the provider repositories.
///
/// Constructed once at startup and injected through the router state; the
/// repositories it owns share one connection pool.
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    profiles: ProviderProfileRepository,
    services: ProviderServiceRepository,
}

impl ProviderCatalog {
    /// Creates a catalog backed by the given connection pool
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            profiles: ProviderProfileRepository::new(db.clone()),
            services: ProviderServiceRepository::new(db),
        }
    }

    /// Registers a new provider profile
    pub async fn register_profile(
        &self,
        dto: &CreateProviderProfileDto,
    ) -> Result<provider_profile::Model, CatalogError> {
        let validated = validation::validate_create_profile(dto)?;
        let created = self.profiles.create(validated).await?;
        Ok(created)
    }

    /// Assembles a profile together with its full catalog as one read.
    ///
    /// The two repository reads are not wrapped in a transaction: a service
    /// added concurrently with this call may or may not appear in the
    /// response. That race is accepted and documented; the profile fetch
    /// alone decides the not-found outcome.
    pub async fn provider_details(
        &self,
        provider_id: Uuid,
    ) -> Result<ProviderDetailsResponse, CatalogError> {
        let profile = self
            .profiles
            .find_by_id(provider_id)
            .await?
            .ok_or_else(|| crate::error::RepositoryError::not_found("provider", provider_id))?;

        let services = self.services.list_for_provider(provider_id).await?;

        Ok(ProviderDetailsResponse {
            profile: profile.into(),
            services: services.into_iter().map(Into::into).collect(),
        })
    }

    /// Validates and applies a sparse patch to a profile
    pub async fn update_profile(
        &self,
        provider_id: Uuid,
        dto: &UpdateProviderProfileDto,
    ) -> Result<provider_profile::Model, CatalogError> {
        let patch = validation::validate_update_profile(dto)?;
        let updated = self.profiles.update(provider_id, patch).await?;
        Ok(updated)
    }

    /// Validates and adds a catalog line item to a profile
    pub async fn add_service(
        &self,
        provider_id: Uuid,
        dto: &CreateServiceItemDto,
    ) -> Result<provider_service::Model, CatalogError> {
        let validated = validation::validate_create_service(dto)?;
        let created = self.services.add(provider_id, validated).await?;
        Ok(created)
    }

    /// Removes a single catalog line item
    pub async fn remove_service(&self, service_id: Uuid) -> Result<(), CatalogError> {
        self.services.delete(service_id).await?;
        Ok(())
    }

    /// Removes a profile and, with it, every service it owns
    pub async fn remove_provider(&self, provider_id: Uuid) -> Result<(), CatalogError> {
        self.profiles.delete(provider_id).await?;
        Ok(())
    }
}
