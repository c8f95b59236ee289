use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create company_contents junction table (per-tenant listing + overrides)
        manager
            .create_table(
                Table::create()
                    .table(CompanyContents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyContents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompanyContents::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(CompanyContents::TenantId).uuid().not_null())
                    .col(
                        ColumnDef::new(CompanyContents::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(CompanyContents::Description).text())
                    .col(ColumnDef::new(CompanyContents::Promotions).text())
                    .col(ColumnDef::new(CompanyContents::Images).json().not_null())
                    .col(
                        ColumnDef::new(CompanyContents::CustomFields)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyContents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CompanyContents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one listing row per (company, tenant) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_company_contents_company_tenant")
                    .table(CompanyContents::Table)
                    .col(CompanyContents::CompanyId)
                    .col(CompanyContents::TenantId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyContents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyContents {
    Table,
    Id,
    CompanyId,
    TenantId,
    IsVisible,
    Description,
    Promotions,
    Images,
    CustomFields,
    CreatedAt,
    UpdatedAt,
}
