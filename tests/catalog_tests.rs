//! Integration tests for the ProviderCatalog application layer.

use anyhow::Result;
use marketplace::catalog::ProviderCatalog;
use marketplace::error::{CatalogError, RepositoryError};
use marketplace::models::ServiceCategory;
use marketplace::models::dto::{
    CreateProviderProfileDto, CreateServiceItemDto, UpdateProviderProfileDto,
};
use uuid::Uuid;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::setup_test_db_arc;

fn joes_garage() -> CreateProviderProfileDto {
    CreateProviderProfileDto {
        user_id: "u1".to_string(),
        business_name: "Joe's Garage".to_string(),
        category: ServiceCategory::Garage,
        phone: "0771234567".to_string(),
        address: "12 Main St".to_string(),
    }
}

#[tokio::test]
async fn register_add_service_then_read_details() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let catalog = ProviderCatalog::new(db);

    let profile = catalog.register_profile(&joes_garage()).await?;
    assert_eq!(profile.business_name, "Joe's Garage");
    assert_eq!(profile.category, ServiceCategory::Garage);
    assert_eq!(profile.phone, "0771234567");
    assert_eq!(profile.address, "12 Main St");

    catalog
        .add_service(
            profile.id,
            &CreateServiceItemDto {
                name: "Oil Change".to_string(),
                price: 2500,
                description: None,
            },
        )
        .await?;

    let details = catalog.provider_details(profile.id).await?;
    assert_eq!(details.profile.id, profile.id);
    assert_eq!(details.services.len(), 1);
    assert_eq!(details.services[0].name, "Oil Change");
    assert_eq!(details.services[0].price, 2500);
    Ok(())
}

#[tokio::test]
async fn details_for_provider_without_services_is_empty_not_an_error() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let catalog = ProviderCatalog::new(db);

    let profile = catalog.register_profile(&joes_garage()).await?;

    let details = catalog.provider_details(profile.id).await?;
    assert!(details.services.is_empty());
    Ok(())
}

#[tokio::test]
async fn details_for_unknown_provider_is_not_found() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let catalog = ProviderCatalog::new(db);

    let err = catalog
        .provider_details(Uuid::new_v4())
        .await
        .expect_err("unknown provider");
    assert!(matches!(
        err,
        CatalogError::Repository(RepositoryError::NotFound { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn invalid_service_never_reaches_storage() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let catalog = ProviderCatalog::new(db);

    let profile = catalog.register_profile(&joes_garage()).await?;

    let err = catalog
        .add_service(
            profile.id,
            &CreateServiceItemDto {
                name: "Oil Change".to_string(),
                price: -2500,
                description: None,
            },
        )
        .await
        .expect_err("negative price");
    match err {
        CatalogError::Validation(validation) => assert_eq!(validation.field, "price"),
        other => panic!("expected validation failure, got {:?}", other),
    }

    let details = catalog.provider_details(profile.id).await?;
    assert!(details.services.is_empty());
    Ok(())
}

#[tokio::test]
async fn failed_patch_leaves_profile_untouched() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let catalog = ProviderCatalog::new(db);

    let profile = catalog.register_profile(&joes_garage()).await?;

    let err = catalog
        .update_profile(
            profile.id,
            &UpdateProviderProfileDto {
                business_name: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect_err("blank business name");
    assert!(matches!(err, CatalogError::Validation(_)));

    let details = catalog.provider_details(profile.id).await?;
    assert_eq!(details.profile.business_name, "Joe's Garage");
    assert_eq!(details.profile.updated_at, profile.updated_at);
    Ok(())
}

#[tokio::test]
async fn patching_phone_keeps_remaining_fields() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let catalog = ProviderCatalog::new(db);

    let profile = catalog.register_profile(&joes_garage()).await?;

    let updated = catalog
        .update_profile(
            profile.id,
            &UpdateProviderProfileDto {
                phone: Some("0119876543".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.phone, "0119876543");
    assert_eq!(updated.business_name, profile.business_name);
    assert_eq!(updated.category, profile.category);
    assert_eq!(updated.address, profile.address);
    assert_eq!(updated.created_at, profile.created_at);
    assert!(updated.updated_at > profile.updated_at);
    Ok(())
}

#[tokio::test]
async fn removing_provider_cascades_to_catalog() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let catalog = ProviderCatalog::new(db);

    let profile = catalog.register_profile(&joes_garage()).await?;
    let service = catalog
        .add_service(
            profile.id,
            &CreateServiceItemDto {
                name: "Oil Change".to_string(),
                price: 2500,
                description: None,
            },
        )
        .await?;

    catalog.remove_provider(profile.id).await?;

    let err = catalog
        .provider_details(profile.id)
        .await
        .expect_err("profile removed");
    assert!(matches!(err, CatalogError::Repository(_)));

    let err = catalog
        .remove_service(service.id)
        .await
        .expect_err("service was cascade-deleted");
    assert!(matches!(
        err,
        CatalogError::Repository(RepositoryError::NotFound { .. })
    ));
    Ok(())
}
