//! Provider profile entity model
//!
//! This module contains the SeaORM entity model for the provider_profiles
//! table, which holds one business record per registered provider account.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use super::category::ServiceCategory;

/// Provider profile entity representing one registered business account
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "provider_profiles")]
pub struct Model {
    /// Unique identifier for the profile (primary key), assigned at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Opaque reference to the owning account (unique, one profile per user)
    pub user_id: String,

    /// Display name of the business
    pub business_name: String,

    /// Business classification
    pub category: ServiceCategory,

    /// Contact phone number
    pub phone: String,

    /// Business address
    pub address: String,

    /// Timestamp when the profile was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::provider_service::Entity")]
    ProviderService,
}

impl Related<super::provider_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProviderService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
