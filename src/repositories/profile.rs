//! Provider profile repository for database operations
//!
//! This module provides the ProviderProfileRepository struct which
//! encapsulates SeaORM operations for the provider_profiles table, including
//! the one-profile-per-user rule and cascade deletion of owned services.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::provider_profile::{self, Entity as ProviderProfile};
use crate::models::provider_service::{self, Entity as ProviderService};
use crate::validation::{ProfilePatch, ValidatedProfile};

/// Repository for provider profile database operations
#[derive(Debug, Clone)]
pub struct ProviderProfileRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl ProviderProfileRepository {
    /// Creates a new ProviderProfileRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates a new provider profile from validated fields.
    ///
    /// Fails with [`RepositoryError::DuplicateProfile`] when the user already
    /// owns a profile. The pre-check is racy by itself; the unique index on
    /// `user_id` is the authoritative guard and a concurrent insert surfaces
    /// as a database-level conflict.
    pub async fn create(&self, fields: ValidatedProfile) -> Result<provider_profile::Model, RepositoryError> {
        let existing = ProviderProfile::find()
            .filter(provider_profile::Column::UserId.eq(fields.user_id.as_str()))
            .one(&*self.db)
            .await?;

        if existing.is_some() {
            return Err(RepositoryError::DuplicateProfile {
                user_id: fields.user_id,
            });
        }

        let now = Utc::now();
        let profile = provider_profile::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(fields.user_id),
            business_name: Set(fields.business_name),
            category: Set(fields.category),
            phone: Set(fields.phone),
            address: Set(fields.address),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let created = profile.insert(&*self.db).await?;
        Ok(created)
    }

    /// Finds a profile by its identifier
    pub async fn find_by_id(
        &self,
        provider_id: Uuid,
    ) -> Result<Option<provider_profile::Model>, RepositoryError> {
        let profile = ProviderProfile::find_by_id(provider_id)
            .one(&*self.db)
            .await?;
        Ok(profile)
    }

    /// Applies a sparse patch to an existing profile.
    ///
    /// Only patch-present fields are written; `id`, `user_id` and
    /// `created_at` are immutable; `updated_at` is refreshed on every
    /// successful call.
    pub async fn update(
        &self,
        provider_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<provider_profile::Model, RepositoryError> {
        let existing = self
            .find_by_id(provider_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("provider", provider_id))?;

        let mut active_model = existing.into_active_model();

        if let Some(business_name) = patch.business_name {
            active_model.business_name = Set(business_name);
        }
        if let Some(category) = patch.category {
            active_model.category = Set(category);
        }
        if let Some(phone) = patch.phone {
            active_model.phone = Set(phone);
        }
        if let Some(address) = patch.address {
            active_model.address = Set(address);
        }
        active_model.updated_at = Set(Utc::now().into());

        let updated = active_model.update(&*self.db).await?;
        Ok(updated)
    }

    /// Deletes a profile together with every service it owns.
    ///
    /// The child delete runs in the same transaction as the profile delete,
    /// so a failure leaves both tables untouched. The FK cascade covers
    /// backends that enforce it; the explicit delete keeps the semantics
    /// identical where foreign keys are not enforced.
    pub async fn delete(&self, provider_id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        ProviderService::delete_many()
            .filter(provider_service::Column::ProviderId.eq(provider_id))
            .exec(&txn)
            .await?;

        let delete_result = ProviderProfile::delete_by_id(provider_id).exec(&txn).await?;

        if delete_result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(RepositoryError::not_found("provider", provider_id));
        }

        txn.commit().await?;
        Ok(())
    }
}
