use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Secondary indexes for the read path
        manager
            .create_index(
                Index::create()
                    .name("idx_company_contents_tenant_visible")
                    .table(CompanyContents::Table)
                    .col(CompanyContents::TenantId)
                    .col(CompanyContents::IsVisible)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_company")
                    .table(Reviews::Table)
                    .col(Reviews::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_categories_parent")
                    .table(Categories::Table)
                    .col(Categories::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_city")
                    .table(Companies::Table)
                    .col(Companies::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_company_contents_tenant_visible")
                    .table(CompanyContents::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reviews_company")
                    .table(Reviews::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_categories_parent")
                    .table(Categories::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_companies_city")
                    .table(Companies::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyContents {
    Table,
    TenantId,
    IsVisible,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    CompanyId,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    ParentId,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    City,
}
