//! Request and response shapes for the provider endpoints
//!
//! The create/update DTOs are the only field subsets accepted from callers;
//! they pass through the validation layer before any entity is materialized.
//! The response shapes are projections of the persisted entities and are
//! never accepted as input.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::category::ServiceCategory;
use super::{provider_profile, provider_service};

/// Request payload for registering a new provider profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProviderProfileDto {
    /// Opaque identifier of the owning account
    #[schema(example = "u1")]
    pub user_id: String,
    /// Display name of the business
    #[schema(example = "Joe's Garage")]
    pub business_name: String,
    /// Business classification
    pub category: ServiceCategory,
    /// Contact phone number
    #[schema(example = "0771234567")]
    pub phone: String,
    /// Business address
    #[schema(example = "12 Main St")]
    pub address: String,
}

/// Sparse patch for an existing provider profile; absent fields are left
/// untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProviderProfileDto {
    /// New display name of the business
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// New business classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ServiceCategory>,
    /// New contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New business address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Request payload for adding a catalog line item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateServiceItemDto {
    /// Display name of the service
    #[schema(example = "Oil Change")]
    pub name: String,
    /// Price in minor currency units
    #[schema(example = 2500)]
    pub price: i64,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Provider profile as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProviderProfileInfo {
    /// Unique identifier of the profile
    #[schema(value_type = String)]
    pub id: Uuid,
    /// Opaque identifier of the owning account
    pub user_id: String,
    /// Display name of the business
    pub business_name: String,
    /// Business classification
    pub category: ServiceCategory,
    /// Contact phone number
    pub phone: String,
    /// Business address
    pub address: String,
    /// Creation timestamp
    #[schema(value_type = String)]
    pub created_at: DateTimeWithTimeZone,
    /// Last mutation timestamp
    #[schema(value_type = String)]
    pub updated_at: DateTimeWithTimeZone,
}

impl From<provider_profile::Model> for ProviderProfileInfo {
    fn from(model: provider_profile::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            business_name: model.business_name,
            category: model.category,
            phone: model.phone,
            address: model.address,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Catalog line item as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProviderServiceInfo {
    /// Unique identifier of the service item
    #[schema(value_type = String)]
    pub id: Uuid,
    /// Identifier of the owning provider profile
    #[schema(value_type = String)]
    pub provider_id: Uuid,
    /// Display name of the service
    pub name: String,
    /// Price in minor currency units
    pub price: i64,
    /// Optional free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp
    #[schema(value_type = String)]
    pub created_at: DateTimeWithTimeZone,
    /// Last mutation timestamp
    #[schema(value_type = String)]
    pub updated_at: DateTimeWithTimeZone,
}

impl From<provider_service::Model> for ProviderServiceInfo {
    fn from(model: provider_service::Model) -> Self {
        Self {
            id: model.id,
            provider_id: model.provider_id,
            name: model.name,
            price: model.price,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Composite read of a profile together with its full catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProviderDetailsResponse {
    /// The provider profile
    pub profile: ProviderProfileInfo,
    /// All catalog line items owned by the profile, in insertion order
    pub services: Vec<ProviderServiceInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_dto_absent_fields_deserialize_as_none() {
        let dto: UpdateProviderProfileDto = serde_json::from_str(r#"{"phone":"0112223344"}"#)
            .expect("partial patch deserializes");

        assert_eq!(dto.phone.as_deref(), Some("0112223344"));
        assert!(dto.business_name.is_none());
        assert!(dto.category.is_none());
        assert!(dto.address.is_none());
    }

    #[test]
    fn update_dto_rejects_unknown_category() {
        let result =
            serde_json::from_str::<UpdateProviderProfileDto>(r#"{"category":"WORKSHOP"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_service_dto_rejects_non_numeric_price() {
        let result = serde_json::from_str::<CreateServiceItemDto>(
            r#"{"name":"Oil Change","price":"cheap"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn service_info_omits_missing_description() {
        let info = ProviderServiceInfo {
            id: Uuid::new_v4(),
            provider_id: Uuid::new_v4(),
            name: "Tyre Rotation".to_string(),
            price: 1500,
            description: None,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        };

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("description").is_none());
    }
}
