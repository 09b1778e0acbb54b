//! Provider service repository for database operations
//!
//! This module provides the ProviderServiceRepository struct which
//! encapsulates SeaORM operations for the provider_services table. Every
//! write is keyed by an existing provider profile; catalog listings come back
//! in insertion order.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::provider_profile::Entity as ProviderProfile;
use crate::models::provider_service::{self, Entity as ProviderService};
use crate::validation::ValidatedService;

/// Repository for provider service database operations
#[derive(Debug, Clone)]
pub struct ProviderServiceRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl ProviderServiceRepository {
    /// Creates a new ProviderServiceRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Adds a catalog line item to an existing profile.
    ///
    /// Fails with [`RepositoryError::NotFound`] when `provider_id` does not
    /// resolve. The owning profile row is never touched, so its `updated_at`
    /// stays unchanged.
    pub async fn add(
        &self,
        provider_id: Uuid,
        fields: ValidatedService,
    ) -> Result<provider_service::Model, RepositoryError> {
        let owner = ProviderProfile::find_by_id(provider_id)
            .one(&*self.db)
            .await?;

        if owner.is_none() {
            return Err(RepositoryError::not_found("provider", provider_id));
        }

        let now = Utc::now();
        let service = provider_service::ActiveModel {
            id: Set(Uuid::new_v4()),
            provider_id: Set(provider_id),
            name: Set(fields.name),
            price: Set(fields.price),
            description: Set(fields.description),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let created = service.insert(&*self.db).await?;
        Ok(created)
    }

    /// Lists all services owned by a profile in insertion order
    pub async fn list_for_provider(
        &self,
        provider_id: Uuid,
    ) -> Result<Vec<provider_service::Model>, RepositoryError> {
        let services = ProviderService::find()
            .filter(provider_service::Column::ProviderId.eq(provider_id))
            .order_by_asc(provider_service::Column::CreatedAt)
            .order_by_asc(provider_service::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(services)
    }

    /// Finds a service by its identifier
    pub async fn find_by_id(
        &self,
        service_id: Uuid,
    ) -> Result<Option<provider_service::Model>, RepositoryError> {
        let service = ProviderService::find_by_id(service_id).one(&*self.db).await?;
        Ok(service)
    }

    /// Deletes a service by its identifier.
    ///
    /// A second call for the same id fails with [`RepositoryError::NotFound`].
    pub async fn delete(&self, service_id: Uuid) -> Result<(), RepositoryError> {
        let delete_result = ProviderService::delete_by_id(service_id)
            .exec(&*self.db)
            .await?;

        if delete_result.rows_affected == 0 {
            return Err(RepositoryError::not_found("service", service_id));
        }

        Ok(())
    }
}
