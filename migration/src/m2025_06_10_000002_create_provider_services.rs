//! Migration to create the provider_services table.
//!
//! This migration creates the provider_services table which stores the catalog
//! line items owned by provider profiles, with cascade deletion when the
//! owning profile is removed.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProviderServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProviderServices::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProviderServices::ProviderId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProviderServices::Name).text().not_null())
                    .col(
                        ColumnDef::new(ProviderServices::Price)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProviderServices::Description).text().null())
                    .col(
                        ColumnDef::new(ProviderServices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProviderServices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_services_provider_id")
                            .from(ProviderServices::Table, ProviderServices::ProviderId)
                            .to(ProviderProfiles::Table, ProviderProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Catalog listings are always fetched per provider
        manager
            .create_index(
                Index::create()
                    .name("idx_provider_services_provider_id")
                    .table(ProviderServices::Table)
                    .col(ProviderServices::ProviderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_provider_services_provider_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProviderServices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProviderServices {
    Table,
    Id,
    ProviderId,
    Name,
    Price,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProviderProfiles {
    Table,
    Id,
}
