//! Database migrations for the Marketplace API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_06_10_000001_create_provider_profiles;
mod m2025_06_10_000002_create_provider_services;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_06_10_000001_create_provider_profiles::Migration),
            Box::new(m2025_06_10_000002_create_provider_services::Migration),
        ]
    }
}
