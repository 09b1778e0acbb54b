//! Migration to create the provider_profiles table.
//!
//! This migration creates the provider_profiles table which holds one business
//! record per registered provider account, with a unique index enforcing the
//! one-profile-per-user rule.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProviderProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProviderProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProviderProfiles::UserId).text().not_null())
                    .col(
                        ColumnDef::new(ProviderProfiles::BusinessName)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProviderProfiles::Category).text().not_null())
                    .col(ColumnDef::new(ProviderProfiles::Phone).text().not_null())
                    .col(ColumnDef::new(ProviderProfiles::Address).text().not_null())
                    .col(
                        ColumnDef::new(ProviderProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProviderProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One profile per user account
        manager
            .create_index(
                Index::create()
                    .name("idx_provider_profiles_user_id")
                    .table(ProviderProfiles::Table)
                    .col(ProviderProfiles::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_provider_profiles_user_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProviderProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProviderProfiles {
    Table,
    Id,
    UserId,
    BusinessName,
    Category,
    Phone,
    Address,
    CreatedAt,
    UpdatedAt,
}
