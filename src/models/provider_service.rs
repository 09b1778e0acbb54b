//! Provider service entity model
//!
//! This module contains the SeaORM entity model for the provider_services
//! table, which stores the catalog line items owned by provider profiles.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use super::provider_profile::Entity as ProviderProfile;

/// Provider service entity representing one catalog line item
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "provider_services")]
pub struct Model {
    /// Unique identifier for the service item (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Identifier of the owning provider profile
    pub provider_id: Uuid,

    /// Display name of the service
    pub name: String,

    /// Price in minor currency units, never negative
    pub price: i64,

    /// Optional free-text description
    pub description: Option<String>,

    /// Timestamp when the service item was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the service item was last updated
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "ProviderProfile",
        from = "Column::ProviderId",
        to = "super::provider_profile::Column::Id"
    )]
    ProviderProfile,
}

impl Related<ProviderProfile> for Entity {
    fn to() -> RelationDef {
        Relation::ProviderProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
