//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations for testing purposes.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use marketplace::models::ServiceCategory;
use marketplace::validation::{ValidatedProfile, ValidatedService};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up an in-memory SQLite database with all migrations applied and returns an Arc.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Builds validated profile fields for repository-level tests.
#[allow(dead_code)]
pub fn validated_profile(user_id: &str, business_name: &str) -> ValidatedProfile {
    ValidatedProfile {
        user_id: user_id.to_string(),
        business_name: business_name.to_string(),
        category: ServiceCategory::Garage,
        phone: "0771234567".to_string(),
        address: "12 Main St".to_string(),
    }
}

/// Builds validated service fields for repository-level tests.
#[allow(dead_code)]
pub fn validated_service(name: &str, price: i64) -> ValidatedService {
    ValidatedService {
        name: name.to_string(),
        price,
        description: None,
    }
}
